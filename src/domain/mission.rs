use serde::{Deserialize, Serialize};

use crate::config::MISSION;
use crate::domain::shielding::Shielding;
use crate::error::{Result, RiskError};

/// Operator-supplied mission inputs. Only constructible through `new`,
/// so a value in hand is always inside the calculator's contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionParameters {
    duration_days: u32,
    shielding: Shielding,
}

impl MissionParameters {
    pub fn new(duration_days: u32, shielding: Shielding) -> Result<Self> {
        let params = Self {
            duration_days,
            shielding,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MISSION.min_days..=MISSION.max_days).contains(&self.duration_days) {
            return Err(RiskError::InvalidInput(format!(
                "mission duration {} days is outside [{}, {}]",
                self.duration_days, MISSION.min_days, MISSION.max_days
            )));
        }
        // Unknown materials cannot be represented, but the catalog lookup still has to succeed.
        self.shielding.factor()?;
        Ok(())
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn shielding(&self) -> Shielding {
        self.shielding
    }
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self {
            duration_days: MISSION.default_days,
            shielding: Shielding::default(),
        }
    }
}
