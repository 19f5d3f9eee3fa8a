//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub flux_line_color: Color32,
    pub flux_line_width: f32,
    /// Colour of the mean marker on the dose histogram
    pub mean_marker_color: Color32,
    pub comparison_bar_color: Color32,
    /// The currently selected material is highlighted
    pub comparison_selected_color: Color32,
    /// Fraction of the available width taken by each comparison bar
    pub comparison_bar_width: f64,
    // Gradient for the dose histogram, low to high bin count
    pub histogram_gradient_colors: &'static [&'static str],
    pub histogram_fallback_color: Color32,
    pub chart_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    flux_line_color: Color32::from_rgb(0, 191, 255), // Deep sky blue
    flux_line_width: 2.0,
    mean_marker_color: Color32::from_rgb(255, 215, 0), // Gold
    comparison_bar_color: Color32::from_rgb(100, 110, 140),
    comparison_selected_color: Color32::from_rgb(255, 165, 0),
    comparison_bar_width: 0.6,
    histogram_gradient_colors: &[
        "#000080", // Navy blue
        "#4b0082", // Indigo
        "#ffb703", // Amber
        "#ff4500", // Orange red
        "#8b0000", // Dark red
    ],
    histogram_fallback_color: Color32::from_rgb(255, 165, 0),
    chart_height: 220.0,
};
