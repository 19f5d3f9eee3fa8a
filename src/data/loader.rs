// Provider selection and the single fetch that feeds the calculator

use std::sync::Arc;

use crate::config::FluxClientConfig;
use crate::data::provider::{FluxOutcome, FluxProvider, OfflineProvider};
use crate::data::swpc_api::SwpcProvider;

/// Build the provider for this run. Falls back to offline mode (and says so)
/// if the HTTP client itself cannot be constructed.
pub fn select_provider(offline: bool, config: FluxClientConfig) -> Arc<dyn FluxProvider> {
    if offline {
        log::info!("Offline mode: live flux feed disabled");
        return Arc::new(OfflineProvider::new(config.energy_band));
    }
    let energy_band = config.energy_band.clone();
    match SwpcProvider::new(config) {
        Ok(provider) => {
            log::info!("Using live flux feed: {}", provider.url());
            Arc::new(provider)
        }
        Err(e) => {
            log::warn!("⚠️  Could not build HTTP client: {:#}", e);
            log::warn!("⚠️  Falling back to offline mode...");
            Arc::new(OfflineProvider::new(energy_band))
        }
    }
}

/// One attempt, never an error: failures become `FluxOutcome::Unavailable`.
pub async fn fetch_flux_outcome(provider: &dyn FluxProvider) -> FluxOutcome {
    let outcome = FluxOutcome::from_result(provider.fetch_flux().await);
    match &outcome {
        FluxOutcome::Available(series) => log::info!(
            "{}: {} samples for '{}', latest {:.3e} at {}",
            provider.signature(),
            series.len(),
            series.energy_band(),
            series.latest().flux,
            series.latest().timestamp
        ),
        FluxOutcome::Unavailable { reason } => {
            log::warn!("⚠️  {} flux unavailable: {}", provider.signature(), reason)
        }
    }
    outcome
}

/// Blocking wrapper for use off the UI thread.
pub fn fetch_flux_blocking(provider: Arc<dyn FluxProvider>) -> FluxOutcome {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(fetch_flux_outcome(provider.as_ref())),
        Err(e) => FluxOutcome::Unavailable {
            reason: format!("failed to start async runtime: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::resolve_flux;
    use crate::error::{Result, RiskError};
    use crate::models::{FluxSample, FluxSeries};
    use async_trait::async_trait;
    use chrono::Utc;

    struct StaticProvider(f64);

    #[async_trait]
    impl FluxProvider for StaticProvider {
        async fn fetch_flux(&self) -> Result<FluxSeries> {
            let sample = FluxSample {
                timestamp: Utc::now(),
                energy_band: ">=10 MeV".to_string(),
                flux: self.0,
            };
            FluxSeries::new(">=10 MeV", vec![sample])
        }

        fn energy_band(&self) -> &str {
            ">=10 MeV"
        }

        fn signature(&self) -> &'static str {
            "Static"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl FluxProvider for FailingProvider {
        async fn fetch_flux(&self) -> Result<FluxSeries> {
            Err(RiskError::DataUnavailable("connection refused".to_string()))
        }

        fn energy_band(&self) -> &str {
            ">=10 MeV"
        }

        fn signature(&self) -> &'static str {
            "Failing"
        }
    }

    #[tokio::test]
    async fn live_provider_yields_available_outcome() {
        let outcome = fetch_flux_outcome(&StaticProvider(2.5)).await;
        assert_eq!(resolve_flux(&outcome).value, 2.5);
    }

    #[tokio::test]
    async fn failing_provider_falls_back_without_error() {
        let outcome = fetch_flux_outcome(&FailingProvider).await;
        assert_eq!(
            outcome,
            FluxOutcome::Unavailable {
                reason: "connection refused".to_string()
            }
        );
        let resolved = resolve_flux(&outcome);
        assert_eq!(resolved.value, 100.0);
        assert!(!resolved.is_live());
    }

    #[test]
    fn blocking_fetch_runs_outside_a_runtime() {
        let outcome = fetch_flux_blocking(Arc::new(StaticProvider(7.0)));
        assert!(matches!(outcome, FluxOutcome::Available(_)));
    }

    #[test]
    fn offline_selection_never_reaches_the_network() {
        let provider = select_provider(true, FluxClientConfig::default());
        assert_eq!(provider.signature(), "Offline");
        assert!(matches!(
            fetch_flux_blocking(provider),
            FluxOutcome::Unavailable { .. }
        ));
    }
}
