// Flux acquisition: provider contract, NOAA client, memoization
pub mod flux_cache;
pub mod loader;
pub mod provider;
pub mod swpc_api;

// Re-export commonly used types
pub use flux_cache::FluxCache;
pub use loader::{fetch_flux_blocking, fetch_flux_outcome, select_provider};
pub use provider::{FluxOutcome, FluxProvider, OfflineProvider, resolve_flux};
pub use swpc_api::{SwpcProvider, parse_flux_records};
