//! Space-weather feed configuration constants and types.

use std::time::Duration;

/// Runtime settings for the flux HTTP client.
/// Built from `FEED.client` but overridable from the command line.
#[derive(Debug, Clone)]
pub struct FluxClientConfig {
    pub url: String,
    pub energy_band: String,
    pub timeout_ms: u64,
}

impl Default for FluxClientConfig {
    fn default() -> Self {
        Self {
            url: FEED.url.to_string(),
            energy_band: FEED.energy_band.to_string(),
            timeout_ms: FEED.client.timeout_ms,
        }
    }
}

impl FluxClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Default values for the REST client
pub struct ClientDefaults {
    /// A single attempt is made; after this the feed counts as unavailable
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

/// Settings for the short-lived memoization of fetched series
pub struct CacheSettings {
    /// Validity window for a cached series (seconds)
    pub ttl_secs: u64,
}

/// The Master Feed Configuration
pub struct FeedConfig {
    /// NOAA SWPC GOES primary proton flux, last 24 hours
    pub url: &'static str,
    /// Only records with exactly this `energy` label are kept
    pub energy_band: &'static str,
    /// Flux used when live data cannot be obtained (p/cm²/s/sr)
    pub fallback_flux: f64,
    pub client: ClientDefaults,
    pub cache: CacheSettings,
}

pub const FEED: FeedConfig = FeedConfig {
    url: "https://services.swpc.noaa.gov/json/goes/primary/differential-proton-flux-1-day.json",
    energy_band: ">=10 MeV",
    fallback_flux: 100.0,
    client: ClientDefaults {
        timeout_ms: 8_000,
        user_agent: concat!("cosmic-risk/", env!("CARGO_PKG_VERSION")),
    },
    cache: CacheSettings {
        // 10 minutes
        ttl_secs: 600,
    },
};
