use colorgrad::Gradient;
use std::hash::{DefaultHasher, Hash, Hasher};

use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Bar, BarChart, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::analysis::{DistributionSummary, HistogramBin};
use crate::config::plot::PLOT_CONFIG;
use crate::domain::Shielding;
use crate::models::{FluxSeries, ShieldingComparisonRow};
use crate::ui::plot_layers::{HistogramBarsLayer, LayerContext, MeanMarkerLayer, PlotLayer};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_dose, format_flux};
use crate::utils::time_utils::epoch_sec_to_axis_label;

/// One histogram bin, ready to draw.
#[derive(Clone, Debug)]
pub struct HistogramBar {
    pub lower: f64,
    pub upper: f64,
    pub count: f64,
    pub color: Color32,
}

#[derive(Clone, Debug)]
pub struct HistogramCache {
    pub bins_hash: u64,
    pub bars: Vec<HistogramBar>,
}

#[derive(Default)]
pub struct PlotView {
    histogram_cache: Option<HistogramCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self {
            histogram_cache: None,
        }
    }

    /// Proton flux over time. X values are epoch seconds.
    pub fn show_flux_chart(&self, ui: &mut egui::Ui, series: &FluxSeries) {
        let points: PlotPoints = series
            .samples()
            .iter()
            .map(|s| [s.timestamp.timestamp() as f64, s.flux])
            .collect();
        let x_bounds = flux_time_bounds(series);

        Plot::new("flux_chart")
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_flux_axis()])
            .label_formatter(|_, value| {
                format!(
                    "{}\n{}",
                    epoch_sec_to_axis_label(value.x),
                    format_flux(value.y)
                )
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                if let Some((x_min, x_max)) = x_bounds {
                    plot_ui.set_plot_bounds_x(x_min..=x_max);
                }
                plot_ui.line(
                    Line::new(series.energy_band().to_string(), points)
                        .color(PLOT_CONFIG.flux_line_color)
                        .width(PLOT_CONFIG.flux_line_width),
                );
            });
    }

    /// Daily dose per material, the selected one highlighted.
    pub fn show_comparison_chart(
        &self,
        ui: &mut egui::Ui,
        rows: &[ShieldingComparisonRow],
        selected: Shielding,
    ) {
        let bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let color = if row.shielding == selected {
                    PLOT_CONFIG.comparison_selected_color
                } else {
                    PLOT_CONFIG.comparison_bar_color
                };
                Bar::new(i as f64, row.daily_dose)
                    .width(PLOT_CONFIG.comparison_bar_width)
                    .name(row.shielding.to_string())
                    .fill(color)
            })
            .collect();

        let names: Vec<String> = rows.iter().map(|row| row.shielding.to_string()).collect();

        Plot::new("comparison_chart")
            .height(PLOT_CONFIG.chart_height * 0.8)
            .custom_x_axes(vec![create_material_axis(names)])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label(UI_TEXT.comparison_chart_y_axis)
                    .formatter(|grid_mark, _range| format_dose(grid_mark.value))
                    .placement(HPlacement::Left),
            ])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(UI_TEXT.comparison_heading, bars));
            });
    }

    /// Histogram of the synthetic dose samples with a mean marker.
    pub fn show_histogram(
        &mut self,
        ui: &mut egui::Ui,
        bins: &[HistogramBin],
        summary: Option<&DistributionSummary>,
    ) {
        let cache = self.calculate_histogram_bars(bins);

        Plot::new("dose_histogram")
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![
                AxisHints::new_x()
                    .label(UI_TEXT.histogram_x_axis)
                    .formatter(|grid_mark, _range| format_dose(grid_mark.value)),
            ])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label(UI_TEXT.histogram_y_axis)
                    .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
                    .placement(HPlacement::Left),
            ])
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                let ctx = LayerContext {
                    cache: &cache,
                    summary,
                };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> =
                    vec![Box::new(HistogramBarsLayer), Box::new(MeanMarkerLayer)];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_histogram_bars(&mut self, bins: &[HistogramBin]) -> HistogramCache {
        let mut hasher = DefaultHasher::new();
        bins.len().hash(&mut hasher);
        for bin in bins {
            bin.lower.to_bits().hash(&mut hasher);
            bin.upper.to_bits().hash(&mut hasher);
            bin.count.hash(&mut hasher);
        }
        let current_hash = hasher.finish();

        if let Some(cache) = &self.histogram_cache {
            if cache.bins_hash == current_hash {
                return cache.clone();
            }
        }

        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;

        let grad = colorgrad::GradientBuilder::new()
            .html_colors(PLOT_CONFIG.histogram_gradient_colors)
            .build::<colorgrad::CatmullRomGradient>();
        if let Err(e) = &grad {
            log::warn!("Histogram gradient unavailable, using flat colour: {}", e);
        }

        let bars = bins
            .iter()
            .map(|bin| {
                let intensity = bin.count as f64 / max_count;
                let color = match &grad {
                    Ok(grad) => to_egui_color(grad.at(intensity as f32)),
                    Err(_) => PLOT_CONFIG.histogram_fallback_color,
                };
                HistogramBar {
                    lower: bin.lower,
                    upper: bin.upper,
                    count: bin.count as f64,
                    color,
                }
            })
            .collect();

        let cache = HistogramCache {
            bins_hash: current_hash,
            bars,
        };
        self.histogram_cache = Some(cache.clone());
        cache
    }
}

/// Pin the x-axis to the observed window. A single-sample series has no width,
/// so the plot keeps its automatic bounds.
fn flux_time_bounds(series: &FluxSeries) -> Option<(f64, f64)> {
    let (first, last) = series.time_span();
    let (x_min, x_max) = (first.timestamp() as f64, last.timestamp() as f64);
    (x_max > x_min).then_some((x_min, x_max))
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.flux_chart_x_axis)
        .formatter(|grid_mark, _range| epoch_sec_to_axis_label(grid_mark.value))
}

fn create_flux_axis() -> AxisHints<'static> {
    let label = format!("{} ({})", UI_TEXT.flux_chart_y_axis, UI_TEXT.flux_units);
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format_flux(grid_mark.value))
        .placement(HPlacement::Left)
}

fn create_material_axis(names: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.comparison_col_material)
        .formatter(move |grid_mark, _range| {
            let index = grid_mark.value.round();
            if (grid_mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            names.get(index as usize).cloned().unwrap_or_default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins() -> Vec<HistogramBin> {
        vec![
            HistogramBin {
                lower: 0.0,
                upper: 1.0,
                count: 2,
            },
            HistogramBin {
                lower: 1.0,
                upper: 2.0,
                count: 8,
            },
        ]
    }

    #[test]
    fn histogram_bars_are_cached_until_bins_change() {
        let mut view = PlotView::new();
        assert!(view.histogram_cache.is_none());

        let first = view.calculate_histogram_bars(&bins());
        let again = view.calculate_histogram_bars(&bins());
        assert_eq!(first.bins_hash, again.bins_hash);
        assert_eq!(first.bars.len(), 2);
        assert_eq!(first.bars[1].count, 8.0);

        let mut changed = bins();
        changed[0].count = 3;
        let updated = view.calculate_histogram_bars(&changed);
        assert_ne!(updated.bins_hash, first.bins_hash);
        assert_eq!(
            view.histogram_cache.as_ref().map(|c| c.bins_hash),
            Some(updated.bins_hash)
        );
    }

    #[test]
    fn flux_chart_spans_the_observed_window() {
        use crate::models::FluxSample;
        use chrono::{TimeZone, Utc};

        let sample = |minute| FluxSample {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 0, minute, 0).unwrap(),
            energy_band: ">=10 MeV".to_string(),
            flux: 0.4,
        };
        let series = FluxSeries::new(">=10 MeV", vec![sample(30), sample(0)]).unwrap();
        let start = sample(0).timestamp.timestamp() as f64;
        assert_eq!(flux_time_bounds(&series), Some((start, start + 1_800.0)));

        let single = FluxSeries::new(">=10 MeV", vec![sample(0)]).unwrap();
        assert_eq!(flux_time_bounds(&single), None);
    }

    #[test]
    fn empty_bins_produce_no_bars() {
        let mut view = PlotView::default();
        assert!(view.calculate_histogram_bars(&[]).bars.is_empty());
    }
}
