use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::FEED;
use crate::error::{Result, RiskError};
use crate::models::{FluxSeries, FluxSource, ResolvedFlux};

#[async_trait]
pub trait FluxProvider: Send + Sync {
    /// Either a validated, non-empty series OR `RiskError::DataUnavailable`.
    /// One attempt per call; no retries.
    async fn fetch_flux(&self) -> Result<FluxSeries>;

    /// The exact energy label this provider filters on.
    fn energy_band(&self) -> &str;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Tagged provider result. The fallback decision is made on this value,
/// never by silently substituting a number inside the provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum FluxOutcome {
    Available(FluxSeries),
    Unavailable { reason: String },
}

impl FluxOutcome {
    pub fn from_result(result: Result<FluxSeries>) -> Self {
        match result {
            Ok(series) => FluxOutcome::Available(series),
            Err(RiskError::DataUnavailable(reason)) => FluxOutcome::Unavailable { reason },
            Err(other) => FluxOutcome::Unavailable {
                reason: other.to_string(),
            },
        }
    }

    pub fn series(&self) -> Option<&FluxSeries> {
        match self {
            FluxOutcome::Available(series) => Some(series),
            FluxOutcome::Unavailable { .. } => None,
        }
    }
}

/// Pick the flux the calculator should run on: the latest live reading,
/// or the fixed fallback value when live data was not available.
pub fn resolve_flux(outcome: &FluxOutcome) -> ResolvedFlux {
    match outcome {
        FluxOutcome::Available(series) => {
            let latest = series.latest();
            ResolvedFlux {
                value: latest.flux,
                source: FluxSource::Live {
                    observed_at: latest.timestamp,
                },
            }
        }
        FluxOutcome::Unavailable { reason } => ResolvedFlux {
            value: FEED.fallback_flux,
            source: FluxSource::Fallback {
                reason: reason.clone(),
            },
        },
    }
}

/// Never touches the network. Backs `--offline`.
pub struct OfflineProvider {
    energy_band: String,
}

impl OfflineProvider {
    pub fn new(energy_band: impl Into<String>) -> Self {
        Self {
            energy_band: energy_band.into(),
        }
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new(FEED.energy_band)
    }
}

#[async_trait]
impl FluxProvider for OfflineProvider {
    async fn fetch_flux(&self) -> Result<FluxSeries> {
        Err(RiskError::DataUnavailable(
            "offline mode: live feed disabled".to_string(),
        ))
    }

    fn energy_band(&self) -> &str {
        &self.energy_band
    }

    fn signature(&self) -> &'static str {
        "Offline"
    }
}
