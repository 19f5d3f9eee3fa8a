//! Error types shared by the flux provider and the dose calculator

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, RiskError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Network, parse or filter failure while fetching flux.
    /// Recovered by the caller with the fallback flux.
    #[error("Live flux data unavailable: {0}")]
    DataUnavailable(String),

    /// Mission parameters (or flux) outside the calculator's contract.
    /// Not recoverable: the computation does not proceed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
