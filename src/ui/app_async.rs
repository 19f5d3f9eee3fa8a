use chrono::Utc;
use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::data::{FluxOutcome, fetch_flux_blocking};
use crate::ui::app::RadiationRiskApp;
use crate::ui::config::UI_CONFIG;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl RadiationRiskApp {
    /// Start a fetch unless one is already in flight.
    /// Without `force`, a still-valid cached series is reused instead.
    pub(super) fn request_flux_refresh(&mut self, force: bool, reason: &str) {
        if self.fetch_promise.is_some() {
            return;
        }
        let Some(provider) = self.provider.as_ref().map(Arc::clone) else {
            return;
        };

        if !force {
            if let Some(series) = self.flux_cache.get(provider.energy_band(), Instant::now()) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_cache_events {
                    log::info!("[flux] cache hit ({reason})");
                }
                let outcome = FluxOutcome::Available(series.clone());
                self.flux_outcome = Some(outcome);
                return;
            }
        }

        log::info!("[flux] fetching from {} ({reason})", provider.signature());
        let promise = Promise::spawn_thread("flux_fetch", move || fetch_flux_blocking(provider));
        self.fetch_promise = Some(promise);
    }

    pub(super) fn poll_flux_fetch(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.fetch_promise.take() else {
            return;
        };
        match promise.try_take() {
            Ok(outcome) => self.apply_flux_outcome(outcome),
            Err(pending) => {
                self.fetch_promise = Some(pending);
                ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.fetch_repaint_ms));
            }
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }

    /// Record a finished fetch. Live series are memoized; failures are not,
    /// so the next refresh tries the network again.
    pub(super) fn apply_flux_outcome(&mut self, outcome: FluxOutcome) {
        self.last_fetch_at = Some(Utc::now());
        if let FluxOutcome::Available(series) = &outcome {
            self.flux_cache.store(series.clone(), Instant::now());
        }
        self.flux_outcome = Some(outcome);
    }
}
