use chrono::{DateTime, Utc};
use eframe::{Frame, egui};
use poll_promise::Promise;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analysis::RiskReport;
use crate::config::MISSION;
use crate::data::{FluxCache, FluxOutcome, FluxProvider, resolve_flux};
use crate::domain::{MissionParameters, Shielding};
use crate::error::RiskError;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Deserialize, Serialize)]
pub struct RadiationRiskApp {
    // Operator inputs (persisted)
    #[serde(default = "default_mission_days")]
    pub(super) mission_days: u32,
    #[serde(default)]
    pub(super) shielding: Shielding,

    // Runtime-only state
    #[serde(skip)]
    pub(super) show_education: bool,
    #[serde(skip)]
    pub(super) provider: Option<Arc<dyn FluxProvider>>,
    #[serde(skip)]
    pub(super) flux_outcome: Option<FluxOutcome>,
    #[serde(skip)]
    pub(super) last_fetch_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub(super) flux_cache: FluxCache,
    #[serde(skip)]
    pub(super) fetch_promise: Option<Promise<FluxOutcome>>,
    #[serde(skip)]
    pub(super) report: Option<RiskReport>,
    #[serde(skip)]
    pub(super) last_error: Option<RiskError>,
    #[serde(skip, default = "default_rng")]
    pub(super) rng: StdRng,
    #[serde(skip)]
    pub(super) plot_view: PlotView,
}

fn default_mission_days() -> u32 {
    MISSION.default_days
}

fn default_rng() -> StdRng {
    StdRng::from_entropy()
}

impl RadiationRiskApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        provider: Arc<dyn FluxProvider>,
        initial_outcome: FluxOutcome,
    ) -> Self {
        let mut app: RadiationRiskApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_else(|| {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted dashboard state. Creating anew.");
                }
                Self::new_with_initial_state()
            });

        // Persisted values come from disk, so re-check them against the slider range
        app.mission_days = app.mission_days.clamp(MISSION.min_days, MISSION.max_days);
        app.provider = Some(provider);
        app.apply_flux_outcome(initial_outcome);
        app.refresh_report();
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            mission_days: default_mission_days(),
            shielding: Shielding::default(),
            show_education: false,
            provider: None,
            flux_outcome: None,
            last_fetch_at: None,
            flux_cache: FluxCache::default(),
            fetch_promise: None,
            report: None,
            last_error: None,
            rng: default_rng(),
            plot_view: PlotView::default(),
        }
    }

    pub(super) fn mission_params(&self) -> Result<MissionParameters, RiskError> {
        MissionParameters::new(self.mission_days, self.shielding)
    }

    /// Rebuild the report only when (flux, params) differ from the last one.
    pub(super) fn refresh_report(&mut self) {
        let Some(outcome) = self.flux_outcome.as_ref() else {
            return;
        };
        let flux = resolve_flux(outcome);

        let params = match self.mission_params() {
            Ok(params) => params,
            Err(e) => {
                log::error!("Rejected mission parameters: {}", e);
                self.report = None;
                self.last_error = Some(e);
                return;
            }
        };

        if self
            .report
            .as_ref()
            .is_some_and(|report| report.matches(&flux, &params))
        {
            return;
        }

        match RiskReport::build(flux, params, &mut self.rng) {
            Ok(report) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_report_rebuilds {
                    log::info!(
                        "Rebuilt risk report: {} days, {}, total {:.4} mSv",
                        params.duration_days(),
                        params.shielding(),
                        report.estimate.total_dose
                    );
                }
                self.report = Some(report);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Risk computation failed: {}", e);
                self.report = None;
                self.last_error = Some(e);
            }
        }
    }
}

impl eframe::App for RadiationRiskApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll background flux fetch
        self.poll_flux_fetch(ctx);
        self.refresh_report();

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
