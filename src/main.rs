#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use cosmic_risk::config::PERSISTENCE;
use cosmic_risk::ui::config::UI_TEXT;
use cosmic_risk::{Cli, FluxOutcome, fetch_flux_outcome, run_app, select_provider};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Initial flux (blocking, one attempt)
    let provider = select_provider(args.offline, args.client_config());
    let initial_outcome = match Runtime::new() {
        Ok(rt) => rt.block_on(fetch_flux_outcome(provider.as_ref())),
        Err(e) => {
            log::error!("⚠️  Failed to create Tokio runtime: {}", e);
            FluxOutcome::Unavailable {
                reason: format!("async runtime unavailable: {}", e),
            }
        }
    };

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app_state_path)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, provider, initial_outcome))),
    )
}
