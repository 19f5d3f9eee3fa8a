//! NOAA SWPC GOES proton flux feed.
//!
//! The endpoint returns a JSON array like
//! `[{"time_tag": "2024-06-01T00:05:00Z", "satellite": 18, "flux": 0.42, "energy": ">=10 MeV"}, ...]`
//! where `flux` may be a number or a numeric string.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{FEED, FluxClientConfig};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::provider::FluxProvider;
use crate::error::{Result, RiskError};
use crate::models::{FluxSample, FluxSeries};
use crate::utils::time_utils::parse_utc_timestamp;

#[derive(Deserialize, Debug)]
struct RawFluxRecord {
    time_tag: Option<String>,
    energy: Option<String>,
    flux: Option<RawFlux>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawFlux {
    Number(f64),
    Text(String),
}

impl RawFlux {
    fn value(&self) -> Option<f64> {
        let value = match self {
            RawFlux::Number(v) => *v,
            RawFlux::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (value.is_finite() && value >= 0.0).then_some(value)
    }
}

impl RawFluxRecord {
    /// Returns None for records of another band or with an unusable timestamp/flux.
    fn into_sample(self, energy_band: &str) -> Option<FluxSample> {
        let energy = self.energy?;
        if energy != energy_band {
            return None;
        }
        let timestamp = parse_utc_timestamp(self.time_tag.as_deref()?)?;
        let flux = self.flux?.value()?;
        Some(FluxSample {
            timestamp,
            energy_band: energy,
            flux,
        })
    }
}

/// Parse a raw feed body into a series for `energy_band`.
/// Malformed JSON or zero surviving records is `DataUnavailable`.
pub fn parse_flux_records(body: &str, energy_band: &str) -> Result<FluxSeries> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| RiskError::DataUnavailable(format!("malformed feed JSON: {}", e)))?;
    let total = records.len();

    let samples: Vec<FluxSample> = records
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RawFluxRecord>(value).ok())
        .filter_map(|record| record.into_sample(energy_band))
        .collect();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_feed_parsing {
        log::info!(
            "Feed parsing kept {} of {} records for band '{}'",
            samples.len(),
            total,
            energy_band
        );
    }

    if samples.is_empty() {
        return Err(RiskError::DataUnavailable(format!(
            "none of {} feed records had a usable '{}' flux",
            total, energy_band
        )));
    }
    FluxSeries::new(energy_band, samples)
}

pub struct SwpcProvider {
    config: FluxClientConfig,
    client: reqwest::Client,
}

impl SwpcProvider {
    pub fn new(config: FluxClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(FEED.client.user_agent)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl FluxProvider for SwpcProvider {
    async fn fetch_flux(&self) -> Result<FluxSeries> {
        let unavailable =
            |e: reqwest::Error| RiskError::DataUnavailable(format!("{}: {}", self.config.url, e));

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;
        let body = response.text().await.map_err(unavailable)?;

        parse_flux_records(&body, &self.config.energy_band)
    }

    fn energy_band(&self) -> &str {
        &self.config.energy_band
    }

    fn signature(&self) -> &'static str {
        "NOAA SWPC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::fetch_flux_outcome;
    use crate::data::provider::{FluxOutcome, resolve_flux};
    use crate::models::FluxSource;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    const BAND: &str = ">=10 MeV";

    fn provider_for(url: String) -> SwpcProvider {
        SwpcProvider::new(FluxClientConfig {
            url,
            energy_band: BAND.to_string(),
            timeout_ms: 500,
        })
        .unwrap()
    }

    /// Serves one canned HTTP response on an ephemeral local port.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/json/goes/primary/differential-proton-flux-1-day.json", addr)
    }

    #[tokio::test]
    async fn refused_connection_is_unavailable_and_falls_back() {
        let provider = provider_for("http://127.0.0.1:1/flux.json".to_string());
        assert!(matches!(
            provider.fetch_flux().await,
            Err(RiskError::DataUnavailable(_))
        ));

        let outcome = fetch_flux_outcome(&provider).await;
        assert!(matches!(outcome, FluxOutcome::Unavailable { .. }));
        let flux = resolve_flux(&outcome);
        assert_eq!(flux.value, 100.0);
        assert!(matches!(flux.source, FluxSource::Fallback { .. }));
    }

    #[tokio::test]
    async fn non_success_status_is_unavailable() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let provider = provider_for(url);
        assert!(matches!(
            provider.fetch_flux().await,
            Err(RiskError::DataUnavailable(_))
        ));
    }

    #[test]
    fn keeps_only_requested_band_with_string_and_number_flux() {
        let body = r#"[
            {"time_tag": "2024-06-01T00:00:00Z", "satellite": 18, "flux": "0.38", "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:00:00Z", "satellite": 18, "flux": 12.5, "energy": ">=1 MeV"},
            {"time_tag": "2024-06-01T00:05:00Z", "satellite": 18, "flux": 0.42, "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:05:00Z", "satellite": 18, "flux": 0.01, "energy": ">=100 MeV"}
        ]"#;
        let series = parse_flux_records(body, BAND).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.energy_band(), BAND);
        assert!(series.samples().iter().all(|s| s.energy_band == BAND));
        assert_eq!(series.latest().flux, 0.42);
    }

    #[test]
    fn drops_unparseable_missing_and_negative_values() {
        let body = r#"[
            {"time_tag": "2024-06-01T00:00:00Z", "flux": "n/a", "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:01:00Z", "flux": null, "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:02:00Z", "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:03:00Z", "flux": -3.0, "energy": ">=10 MeV"},
            {"time_tag": "not a time", "flux": 1.0, "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:04:00Z", "flux": true, "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:05:00Z", "flux": "0.9", "energy": ">=10 MeV"},
            "garbage"
        ]"#;
        let series = parse_flux_records(body, BAND).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.latest().flux, 0.9);
    }

    #[test]
    fn current_reading_is_latest_timestamp_not_last_in_feed() {
        let body = r#"[
            {"time_tag": "2024-06-01 00:10:00", "flux": 3.0, "energy": ">=10 MeV"},
            {"time_tag": "2024-06-01T00:00:00Z", "flux": 1.0, "energy": ">=10 MeV"}
        ]"#;
        let series = parse_flux_records(body, BAND).unwrap();
        assert_eq!(series.latest().flux, 3.0);
        assert_eq!(series.samples()[0].flux, 1.0);
    }

    #[test]
    fn malformed_json_is_unavailable() {
        for body in ["<html>502</html>", "{\"flux\": 1}", ""] {
            let err = parse_flux_records(body, BAND).unwrap_err();
            assert!(matches!(err, RiskError::DataUnavailable(_)), "{body:?}");
        }
    }

    #[test]
    fn no_matching_records_is_unavailable() {
        let body = r#"[{"time_tag": "2024-06-01T00:00:00Z", "flux": 5.0, "energy": ">=50 MeV"}]"#;
        assert!(matches!(
            parse_flux_records(body, BAND),
            Err(RiskError::DataUnavailable(_))
        ));
        assert!(matches!(
            parse_flux_records("[]", BAND),
            Err(RiskError::DataUnavailable(_))
        ));
    }

    #[test]
    fn energy_label_must_match_exactly() {
        let body = r#"[{"time_tag": "2024-06-01T00:00:00Z", "flux": 5.0, "energy": " >=10 MeV"}]"#;
        assert!(parse_flux_records(body, BAND).is_err());
    }
}
