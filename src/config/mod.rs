//! Configuration module for the radiation risk dashboard.

pub mod dose;
pub mod feed;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use dose::{DOSE_MODEL, MISSION};
pub use feed::{FEED, FluxClientConfig};
pub use persistence::PERSISTENCE;
