#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used types
pub use analysis::{RiskReport, compute};
pub use data::{FluxOutcome, FluxProvider, fetch_flux_outcome, resolve_flux, select_provider};
pub use domain::{MissionParameters, Shielding};
pub use error::{Result, RiskError};
pub use models::{DoseEstimate, FluxSeries, RiskCategory};
pub use ui::RadiationRiskApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the live feed and use the default flux
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Override the NOAA SWPC proton flux endpoint
    #[arg(long)]
    pub feed_url: Option<String>,
}

impl Cli {
    pub fn client_config(&self) -> config::FluxClientConfig {
        let mut client = config::FluxClientConfig::default();
        if let Some(url) = &self.feed_url {
            client.url = url.clone();
        }
        client
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    provider: Arc<dyn FluxProvider>,
    initial_outcome: FluxOutcome,
) -> Box<dyn eframe::App> {
    let app = ui::RadiationRiskApp::new(cc, provider, initial_outcome);
    Box::new(app)
}
