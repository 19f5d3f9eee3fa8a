use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

// ============================================================================
// FluxSample: one proton flux observation
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FluxSample {
    pub timestamp: DateTime<Utc>,
    pub energy_band: String,
    /// protons / cm² / s / sr. Always finite and non-negative.
    pub flux: f64,
}

// ============================================================================
// FluxSeries: validated, time-ordered observations for a single energy band
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "FluxSeriesParts")]
pub struct FluxSeries {
    energy_band: String,
    samples: Vec<FluxSample>,
}

/// Unchecked wire shape; deserialization goes through `FluxSeries::new`.
#[derive(Deserialize)]
struct FluxSeriesParts {
    energy_band: String,
    samples: Vec<FluxSample>,
}

impl TryFrom<FluxSeriesParts> for FluxSeries {
    type Error = RiskError;

    fn try_from(parts: FluxSeriesParts) -> Result<Self> {
        FluxSeries::new(parts.energy_band, parts.samples)
    }
}

impl FluxSeries {
    /// Builds a series from already-filtered samples.
    /// Sorting is stable so equal timestamps keep feed order.
    pub fn new(energy_band: impl Into<String>, mut samples: Vec<FluxSample>) -> Result<Self> {
        let energy_band = energy_band.into();
        if samples.is_empty() {
            return Err(RiskError::DataUnavailable(format!(
                "no usable records for energy band '{}'",
                energy_band
            )));
        }
        if let Some(bad) = samples
            .iter()
            .find(|s| s.energy_band != energy_band || !s.flux.is_finite() || s.flux < 0.0)
        {
            return Err(RiskError::DataUnavailable(format!(
                "sample at {} does not belong in a '{}' series",
                bad.timestamp, energy_band
            )));
        }
        samples.sort_by_key(|s| s.timestamp);
        Ok(Self {
            energy_band,
            samples,
        })
    }

    /// The "current" reading: the element with the latest timestamp.
    pub fn latest(&self) -> &FluxSample {
        // Non-empty by construction
        &self.samples[self.samples.len() - 1]
    }

    pub fn samples(&self) -> &[FluxSample] {
        &self.samples
    }

    pub fn energy_band(&self) -> &str {
        &self.energy_band
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn time_span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.samples[0].timestamp, self.latest().timestamp)
    }
}

// ============================================================================
// ResolvedFlux: the value handed to the calculator, with its provenance
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum FluxSource {
    /// Latest reading of a live series
    Live { observed_at: DateTime<Utc> },
    /// Live data could not be used; the fixed default was substituted
    Fallback { reason: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolvedFlux {
    pub value: f64,
    pub source: FluxSource,
}

impl ResolvedFlux {
    pub fn is_live(&self) -> bool {
        matches!(self.source, FluxSource::Live { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(minute: u32, flux: f64) -> FluxSample {
        FluxSample {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 0, minute, 0).unwrap(),
            energy_band: ">=10 MeV".to_string(),
            flux,
        }
    }

    #[test]
    fn series_is_sorted_and_latest_is_time_max() {
        let series =
            FluxSeries::new(">=10 MeV", vec![sample(10, 3.0), sample(0, 1.0), sample(5, 2.0)])
                .unwrap();
        let fluxes: Vec<f64> = series.samples().iter().map(|s| s.flux).collect();
        assert_eq!(fluxes, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.latest().flux, 3.0);
        assert_eq!(series.time_span().0, sample(0, 0.0).timestamp);
    }

    #[test]
    fn empty_series_is_unavailable() {
        let err = FluxSeries::new(">=10 MeV", Vec::new()).unwrap_err();
        assert!(matches!(err, RiskError::DataUnavailable(_)));
    }

    #[test]
    fn rejects_samples_from_another_band_or_negative_flux() {
        let mut other = sample(0, 1.0);
        other.energy_band = ">=50 MeV".to_string();
        assert!(FluxSeries::new(">=10 MeV", vec![other]).is_err());
        assert!(FluxSeries::new(">=10 MeV", vec![sample(0, -1.0)]).is_err());
    }

    #[test]
    fn deserialized_series_keeps_its_invariants() {
        let empty = r#"{"energy_band": ">=10 MeV", "samples": []}"#;
        assert!(serde_json::from_str::<FluxSeries>(empty).is_err());

        let unsorted = r#"{"energy_band": ">=10 MeV", "samples": [
            {"timestamp": "2024-06-01T00:10:00Z", "energy_band": ">=10 MeV", "flux": 3.0},
            {"timestamp": "2024-06-01T00:00:00Z", "energy_band": ">=10 MeV", "flux": 1.0}
        ]}"#;
        let series: FluxSeries = serde_json::from_str(unsorted).unwrap();
        assert_eq!(series.latest().flux, 3.0);
        assert_eq!(series.time_span().0, sample(0, 0.0).timestamp);
    }
}
