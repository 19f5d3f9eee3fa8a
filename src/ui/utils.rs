use std::time::Duration;

use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Flux readings span many orders of magnitude, so always scientific.
pub fn format_flux(flux: f64) -> String {
    format!("{:.2e}", flux)
}

/// Doses in mSv. Small per-day values need more precision than totals.
pub fn format_dose(dose_msv: f64) -> String {
    if dose_msv != 0.0 && dose_msv.abs() < 0.01 {
        format!("{:.5}", dose_msv)
    } else {
        format!("{:.2}", dose_msv)
    }
}

/// Chest X-ray equivalents are shown as a whole number.
pub fn format_xray(xray_equivalent: f64) -> String {
    format!("{:.0}", xray_equivalent)
}

pub fn format_risk_percent(risk_percent: f64) -> String {
    format!("{:.2} %", risk_percent)
}

pub fn format_duration_short(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds < 60.0 {
        format!("{:.0}s", seconds)
    } else if seconds < 3_600.0 {
        format!("{:.1}m", seconds / 60.0)
    } else {
        format!("{:.1}h", seconds / 3_600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dose_precision_depends_on_magnitude() {
        assert_eq!(format_dose(0.63), "0.63");
        assert_eq!(format_dose(0.0035), "0.00350");
        assert_eq!(format_dose(0.0), "0.00");
        assert_eq!(format_flux(0.42), "4.20e-1");
    }

    #[test]
    fn aluminum_half_year_headline_text() {
        use crate::analysis::compute;
        use crate::domain::{MissionParameters, Shielding};

        let params = MissionParameters::new(180, Shielding::Aluminum).unwrap();
        let estimate = compute(100.0, &params).unwrap();
        assert_eq!(format_xray(estimate.xray_equivalent), "6");
        assert_eq!(format_risk_percent(estimate.risk_percent), "0.00 %");
        assert_eq!(format_dose(estimate.total_dose), "0.63");
    }

    #[test]
    fn risk_percent_keeps_two_decimals() {
        assert_eq!(format_risk_percent(2.5), "2.50 %");
        assert_eq!(format_xray(6.5001), "7");
    }

    #[test]
    fn short_durations() {
        assert_eq!(format_duration_short(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration_short(Duration::from_secs(90)), "1.5m");
        assert_eq!(format_duration_short(Duration::from_secs(5_400)), "1.5h");
    }
}
