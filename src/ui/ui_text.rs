//! User-facing strings, kept in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub window_title: &'static str,

    pub mission_heading: &'static str,
    pub duration_label: &'static str,
    pub shielding_label: &'static str,
    pub data_source_heading: &'static str,
    pub refresh_button: &'static str,
    pub force_refresh_button: &'static str,
    pub refresh_tooltip: &'static str,
    pub force_refresh_tooltip: &'static str,

    pub live_flux_prefix: &'static str,
    pub flux_units: &'static str,
    pub fallback_warning: &'static str,
    pub fetching_label: &'static str,

    pub flux_chart_heading: &'static str,
    pub flux_chart_x_axis: &'static str,
    pub flux_chart_y_axis: &'static str,
    pub metrics_heading: &'static str,
    pub metric_total_dose: &'static str,
    pub metric_risk: &'static str,
    pub metric_daily_dose: &'static str,
    pub xray_prefix: &'static str,
    pub xray_suffix: &'static str,
    pub category_prefix: &'static str,

    pub comparison_heading: &'static str,
    pub comparison_col_material: &'static str,
    pub comparison_col_factor: &'static str,
    pub comparison_col_daily: &'static str,
    pub comparison_chart_y_axis: &'static str,

    pub histogram_heading: &'static str,
    pub histogram_x_axis: &'static str,
    pub histogram_y_axis: &'static str,
    pub histogram_note: &'static str,
    pub histogram_mean_label: &'static str,

    pub education_heading: &'static str,
    pub education_sections: &'static [(&'static str, &'static str)],
    pub model_caption: &'static str,

    pub error_heading: &'static str,
    pub preparing_heading: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "🚀 Cosmic Radiation Risk Calculator",
    app_subtitle: "Estimate radiation risk from cosmic exposure during space missions using live data 🌌",
    window_title: "Cosmic Radiation Risk Calculator",

    mission_heading: "Mission",
    duration_label: "Mission Duration",
    shielding_label: "Shielding Material",
    data_source_heading: "Data Source",
    refresh_button: "🔄 Refresh live data",
    force_refresh_button: "Force refresh",
    refresh_tooltip: "Re-use the last live series if it is less than 10 minutes old",
    force_refresh_tooltip: "Ignore the cached series and query the feed now",

    live_flux_prefix: "Live Proton Flux (≥10 MeV): ",
    flux_units: "protons/cm²/s/sr",
    fallback_warning: "⚠️ Unable to fetch live data. Using default flux: 100 p/cm²/s/sr",
    fetching_label: "Fetching live flux...",

    flux_chart_heading: "☄️ Real-Time Proton Flux (≥10 MeV)",
    flux_chart_x_axis: "Time (UTC)",
    flux_chart_y_axis: "Proton Flux",
    metrics_heading: "Estimate",
    metric_total_dose: "☢️ Estimated Total Dose (mSv)",
    metric_risk: "⚠️ Estimated Cancer Risk",
    metric_daily_dose: "Daily Dose (mSv/day)",
    xray_prefix: "💡 Equivalent to ~",
    xray_suffix: " chest X-rays",
    category_prefix: "🧬 Risk Category: ",

    comparison_heading: "Shielding Comparison",
    comparison_col_material: "Material",
    comparison_col_factor: "Factor",
    comparison_col_daily: "Daily Dose (mSv/day)",
    comparison_chart_y_axis: "mSv/day",

    histogram_heading: "Dose Uncertainty (illustrative)",
    histogram_x_axis: "Total Dose (mSv)",
    histogram_y_axis: "Samples",
    histogram_note: "10,000 draws of ±10% noise around the estimate. Display only, not a physical simulation.",
    histogram_mean_label: "Mean",

    education_heading: "📚 Learn about space radiation",
    education_sections: &[
        (
            "Proton flux",
            "Solar energetic particles are counted by the GOES satellites as a flux: protons per \
             square centimetre, per second, per steradian, above an energy threshold. The ≥10 MeV \
             band is the one used for space weather alerts.",
        ),
        (
            "Dose",
            "Absorbed radiation is expressed in millisieverts (mSv). A chest X-ray is about 0.1 mSv; \
             a six month stay on the ISS is on the order of 50–100 mSv.",
        ),
        (
            "Shielding",
            "Hydrogen-rich materials such as polyethylene slow protons with less secondary \
             radiation than metals, which is why they attenuate more dose per unit mass than aluminum.",
        ),
        (
            "Risk model",
            "The linear excess relative risk (ERR) model adds about 5% lifetime cancer risk per \
             sievert of exposure. It is a population average, not an individual prognosis.",
        ),
    ],
    model_caption: "ICRP model: 5% risk increase per 1 Sv of exposure. Not for clinical use.",

    error_heading: "⚠ Unable to Generate Results",
    preparing_heading: "Preparing estimate...",
};
