// Value types for flux observations and dose estimates.
// Pure data, independent of UI and transport.

pub mod dose;
pub mod flux;

// Re-export key types for convenience
pub use dose::{DoseEstimate, RiskCategory, ShieldingComparisonRow};
pub use flux::{FluxSample, FluxSeries, FluxSource, ResolvedFlux};
