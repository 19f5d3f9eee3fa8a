use serde::{Deserialize, Serialize};

use crate::config::DOSE_MODEL;
use crate::domain::Shielding;

/// Coarse risk band used for colouring and the headline.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::Display,
)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    /// Thresholds are inclusive-low: exactly 1.0 is Moderate, exactly 5.0 is High.
    pub fn from_risk_percent(risk_percent: f64) -> Self {
        if risk_percent < DOSE_MODEL.moderate_threshold_pct {
            RiskCategory::Low
        } else if risk_percent < DOSE_MODEL.high_threshold_pct {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }
}

/// Derived quantities for one (flux, mission) pair. Doses are in mSv.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DoseEstimate {
    pub base_dose_per_day: f64,
    pub daily_dose: f64,
    pub total_dose: f64,
    pub risk_percent: f64,
    pub xray_equivalent: f64,
    pub category: RiskCategory,
}

/// One row of the shielding comparison table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ShieldingComparisonRow {
    pub shielding: Shielding,
    pub factor: f64,
    /// mSv/day for this material at the current flux
    pub daily_dose: f64,
}
