use eframe::egui::{
    CentralPanel, CollapsingHeader, Context, Frame, Grid, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui,
};
use std::time::Instant;

use crate::analysis::RiskReport;
use crate::config::{DOSE_MODEL, MISSION};
use crate::models::{FluxSeries, FluxSource};
use crate::ui::ui_panels::{DataSourceEvent, DataSourcePanel, MissionEvent, MissionPanel, Panel};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::{
    format_dose, format_duration_short, format_flux, format_risk_percent, format_xray,
    section_heading, spaced_separator,
};
use crate::utils::time_utils::{format_utc, how_many_seconds_ago};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

use super::app::RadiationRiskApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl RadiationRiskApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mission_events = self.mission_panel(ui);
                spaced_separator(ui);
                let source_events = self.data_source_panel(ui);

                for event in mission_events {
                    match event {
                        MissionEvent::DurationDays(days) => {
                            let days = days.clamp(MISSION.min_days, MISSION.max_days);
                            if days != self.mission_days {
                                self.mission_days = days;
                                self.on_inputs_changed("mission duration changed");
                            }
                        }
                        MissionEvent::Shielding(material) => {
                            if material != self.shielding {
                                self.shielding = material;
                                self.on_inputs_changed("shielding changed");
                            }
                        }
                    }
                }

                for event in source_events {
                    match event {
                        DataSourceEvent::Refresh { force } => {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!("Refresh requested (force: {})", force);
                            }
                            let reason = if force { "forced refresh" } else { "refresh button" };
                            self.request_flux_refresh(force, reason);
                        }
                    }
                }
            });
    }

    /// Any input change re-reads the (usually cached) flux, then recomputes.
    fn on_inputs_changed(&mut self, reason: &str) {
        self.request_flux_refresh(false, reason);
        self.refresh_report();
    }

    fn mission_panel(&mut self, ui: &mut Ui) -> Vec<MissionEvent> {
        let mut panel = MissionPanel::new(self.mission_days, self.shielding);
        panel.render(ui)
    }

    fn data_source_panel(&mut self, ui: &mut Ui) -> Vec<DataSourceEvent> {
        let mut panel = DataSourcePanel::new(self.is_fetching());
        panel.render(ui)
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("central_scroll")
                    .show(ui, |ui| {
                        ui.heading(RichText::new(UI_TEXT.app_title).strong());
                        ui.label_subdued(UI_TEXT.app_subtitle);
                        ui.add_space(10.0);

                        match (&self.report, &self.last_error) {
                            (Some(report), _) => {
                                let series = self.flux_outcome.as_ref().and_then(|o| o.series());
                                Self::render_report(
                                    ui,
                                    report,
                                    series,
                                    &mut self.plot_view,
                                    &mut self.show_education,
                                );
                            }
                            (None, Some(error)) => {
                                ui.vertical_centered(|ui| {
                                    ui.add_space(40.0);
                                    ui.heading(
                                        RichText::new(UI_TEXT.error_heading)
                                            .color(UI_CONFIG.colors.risk_high),
                                    );
                                    ui.add_space(10.0);
                                    ui.label_error(error.to_string());
                                });
                            }
                            (None, None) => {
                                ui.vertical_centered(|ui| {
                                    ui.add_space(40.0);
                                    ui.spinner();
                                    ui.label_subdued(UI_TEXT.preparing_heading);
                                });
                            }
                        }
                    });
            });
    }

    fn render_report(
        ui: &mut Ui,
        report: &RiskReport,
        series: Option<&FluxSeries>,
        plot_view: &mut PlotView,
        show_education: &mut bool,
    ) {
        // Flux source
        match &report.flux.source {
            FluxSource::Live { .. } => {
                ui.label_success(format!(
                    "{}{} {}",
                    UI_TEXT.live_flux_prefix,
                    format_flux(report.flux.value),
                    UI_TEXT.flux_units
                ));
            }
            FluxSource::Fallback { reason } => {
                ui.label_warning(UI_TEXT.fallback_warning);
                ui.label_subdued(reason.as_str());
            }
        }

        if let Some(series) = series {
            section_heading(ui, UI_TEXT.flux_chart_heading);
            plot_view.show_flux_chart(ui, series);
        }

        // Headline numbers
        section_heading(ui, UI_TEXT.metrics_heading);
        let estimate = &report.estimate;
        let risk_color = UI_CONFIG.risk_color(estimate.category);
        ui.horizontal(|ui| {
            ui.metric(
                UI_TEXT.metric_total_dose,
                &format_dose(estimate.total_dose),
                UI_CONFIG.colors.heading,
            );
            ui.add_space(30.0);
            ui.metric(
                UI_TEXT.metric_risk,
                &format_risk_percent(estimate.risk_percent),
                risk_color,
            );
            ui.add_space(30.0);
            ui.metric(
                UI_TEXT.metric_daily_dose,
                &format_dose(estimate.daily_dose),
                UI_CONFIG.colors.label,
            );
        });
        ui.add_space(8.0);
        ui.label(format!(
            "{}{}{}",
            UI_TEXT.xray_prefix,
            format_xray(estimate.xray_equivalent),
            UI_TEXT.xray_suffix
        ));
        ui.label(
            RichText::new(format!("{}{}", UI_TEXT.category_prefix, estimate.category))
                .strong()
                .color(risk_color),
        );

        // Shielding comparison
        section_heading(ui, UI_TEXT.comparison_heading);
        Grid::new("comparison_grid")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label_subheader(UI_TEXT.comparison_col_material);
                ui.label_subheader(UI_TEXT.comparison_col_factor);
                ui.label_subheader(UI_TEXT.comparison_col_daily);
                ui.end_row();

                for row in &report.comparison {
                    let name = row.shielding.to_string();
                    if row.shielding == report.params.shielding() {
                        ui.label(RichText::new(name).strong());
                    } else {
                        ui.label(name);
                    }
                    ui.label(format!("{:.1}", row.factor));
                    ui.label(format_dose(row.daily_dose));
                    ui.end_row();
                }
            });
        ui.add_space(6.0);
        plot_view.show_comparison_chart(ui, &report.comparison, report.params.shielding());

        // Uncertainty
        section_heading(ui, UI_TEXT.histogram_heading);
        plot_view.show_histogram(ui, &report.histogram, report.summary.as_ref());
        if let Some(summary) = &report.summary {
            ui.label_subdued(format!(
                "n = {}, σ = {} mSv, range {} to {} mSv",
                summary.count,
                format_dose(summary.std_dev),
                format_dose(summary.min),
                format_dose(summary.max)
            ));
        }
        ui.label_subdued(UI_TEXT.histogram_note);

        spaced_separator(ui);

        // Open state lives in the app so it survives report rebuilds
        let education = CollapsingHeader::new(UI_TEXT.education_heading)
            .open(Some(*show_education))
            .show(ui, |ui| {
                for (title, body) in UI_TEXT.education_sections {
                    ui.label_subheader(*title);
                    ui.label(*body);
                    ui.add_space(6.0);
                }
            });
        if education.header_response.clicked() {
            *show_education = !*show_education;
        }

        ui.add_space(10.0);
        ui.label_subdued(UI_TEXT.model_caption);
        ui.label_subdued(format!(
            "{} mSv/day per unit flux, {}% per Sv",
            DOSE_MODEL.dose_per_flux_msv, DOSE_MODEL.risk_percent_per_sv
        ));
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Source
                    if let Some(provider) = &self.provider {
                        ui.label_subdued(format!("📡 {}", provider.signature()));
                        ui.separator();
                    }

                    // 2. Live or fallback
                    match self.flux_outcome.as_ref().and_then(|o| o.series()) {
                        Some(series) => {
                            let latest = series.latest();
                            ui.label_success(format!("LIVE {}", format_flux(latest.flux)));
                            ui.label_subdued(format!(
                                "observed {} ({} samples)",
                                format_utc(&latest.timestamp),
                                series.len()
                            ));
                        }
                        None => ui.label_warning("FALLBACK"),
                    }
                    ui.separator();

                    // 3. Freshness
                    if let Some(fetched_at) = &self.last_fetch_at {
                        ui.label_subdued(format!(
                            "fetched {}s ago",
                            how_many_seconds_ago(fetched_at)
                        ));
                    }
                    if let Some(age) = self.flux_cache.age(Instant::now()) {
                        ui.label_subdued(format!(
                            "| cache {} / {}",
                            format_duration_short(age),
                            format_duration_short(self.flux_cache.ttl())
                        ));
                    }

                    if self.is_fetching() {
                        ui.separator();
                        ui.spinner();
                        ui.label_warning(UI_TEXT.fetching_label);
                    }
                });
            });
    }
}
