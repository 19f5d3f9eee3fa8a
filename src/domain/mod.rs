// Domain types and value objects
pub mod mission;
pub mod shielding;

// Re-export commonly used types
pub use mission::MissionParameters;
pub use shielding::{SHIELDING_CATALOG, Shielding, ShieldingCatalog};
