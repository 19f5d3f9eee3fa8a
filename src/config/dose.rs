//! Dose model and mission input configuration

/// Empirical constants of the dose/risk model.
/// These are contract constants, reproduced exactly.
pub struct DoseModelConfig {
    /// mSv per day per unit of >=10 MeV proton flux
    pub dose_per_flux_msv: f64,
    /// Linear ERR model: percent risk increase per sievert
    pub risk_percent_per_sv: f64,
    pub msv_per_sv: f64,
    /// Effective dose of a single chest X-ray (mSv)
    pub chest_xray_msv: f64,
    /// Risk category thresholds (percent). Both are inclusive-low.
    pub moderate_threshold_pct: f64,
    pub high_threshold_pct: f64,
    pub synthetic: SyntheticSettings,
}

/// Settings for the illustrative dose histogram
pub struct SyntheticSettings {
    pub sample_count: usize,
    /// Standard deviation as a fraction of the mean
    pub relative_spread: f64,
    pub histogram_bins: usize,
}

/// Configuration for the mission duration slider
pub struct MissionConfig {
    pub min_days: u32,
    pub max_days: u32,
    pub default_days: u32,
}

pub const DOSE_MODEL: DoseModelConfig = DoseModelConfig {
    dose_per_flux_msv: 0.00005,
    risk_percent_per_sv: 5.0,
    msv_per_sv: 1000.0,
    chest_xray_msv: 0.1,
    moderate_threshold_pct: 1.0,
    high_threshold_pct: 5.0,
    synthetic: SyntheticSettings {
        sample_count: 10_000,
        relative_spread: 0.1,
        histogram_bins: 40,
    },
};

pub const MISSION: MissionConfig = MissionConfig {
    min_days: 1,
    max_days: 1000,
    default_days: 180,
};
