use eframe::egui::Stroke;
use egui_plot::{PlotPoints, PlotUi, Polygon, VLine};

use crate::analysis::DistributionSummary;
use crate::config::plot::PLOT_CONFIG;
use crate::ui::ui_plot_view::HistogramCache;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_dose;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub cache: &'a HistogramCache,
    pub summary: Option<&'a DistributionSummary>,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. HISTOGRAM BARS
// ============================================================================
pub struct HistogramBarsLayer;

impl PlotLayer for HistogramBarsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for bar in &ctx.cache.bars {
            let points = PlotPoints::new(vec![
                [bar.lower, 0.0],
                [bar.upper, 0.0],
                [bar.upper, bar.count],
                [bar.lower, bar.count],
            ]);

            // Shared name groups every bin under one legend entry
            let polygon = Polygon::new(UI_TEXT.histogram_y_axis, points)
                .fill_color(bar.color)
                .stroke(Stroke::NONE);

            plot_ui.polygon(polygon);
        }
    }
}

// ============================================================================
// 2. MEAN MARKER
// ============================================================================
pub struct MeanMarkerLayer;

impl PlotLayer for MeanMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(summary) = ctx.summary else {
            return;
        };
        let label = format!(
            "{}: {} mSv",
            UI_TEXT.histogram_mean_label,
            format_dose(summary.mean)
        );
        plot_ui.vline(
            VLine::new(label, summary.mean)
                .color(PLOT_CONFIG.mean_marker_color)
                .width(2.0),
        );
    }
}
