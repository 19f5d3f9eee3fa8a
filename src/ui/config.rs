use eframe::egui::Color32;

use crate::models::RiskCategory;
pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub risk_low: Color32,
    pub risk_moderate: Color32,
    pub risk_high: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Status bar refresh cadence while a fetch is in flight (ms)
    pub fetch_repaint_ms: u64,
}

impl UiConfig {
    pub fn risk_color(&self, category: RiskCategory) -> Color32 {
        match category {
            RiskCategory::Low => self.colors.risk_low,
            RiskCategory::Moderate => self.colors.risk_moderate,
            RiskCategory::High => self.colors.risk_high,
        }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 24, 40),
        side_panel: Color32::from_rgb(25, 25, 25),
        success: Color32::from_rgb(110, 200, 120),
        warning: Color32::from_rgb(255, 215, 0),
        risk_low: Color32::from_rgb(80, 200, 100),
        risk_moderate: Color32::from_rgb(255, 165, 0),
        risk_high: Color32::from_rgb(230, 60, 60),
    },
    side_panel_min_width: 200.0,
    fetch_repaint_ms: 200,
};
