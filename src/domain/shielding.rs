use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, RiskError};

/// Shielding material around the crew.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Shielding {
    #[default]
    None,
    Aluminum,
    Polyethylene,
}

impl Shielding {
    /// Parse an operator-supplied material name, rejecting anything outside the catalog.
    pub fn from_name(name: &str) -> Result<Self> {
        Shielding::from_str(name.trim()).map_err(|_| {
            RiskError::InvalidInput(format!("unknown shielding material '{}'", name))
        })
    }

    /// Attenuation factor from the global catalog.
    pub fn factor(self) -> Result<f64> {
        SHIELDING_CATALOG.factor(self)
    }
}

/// Fixed mapping from material to dimensionless attenuation factor.
/// Single source of truth for both the estimate and the comparison table.
pub struct ShieldingCatalog {
    entries: &'static [(Shielding, f64)],
}

pub const SHIELDING_CATALOG: ShieldingCatalog = ShieldingCatalog {
    entries: &[
        (Shielding::None, 1.0),
        (Shielding::Aluminum, 0.7),
        (Shielding::Polyethylene, 0.5),
    ],
};

impl ShieldingCatalog {
    pub fn factor(&self, shielding: Shielding) -> Result<f64> {
        self.entries
            .iter()
            .find(|(material, _)| *material == shielding)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| {
                RiskError::InvalidInput(format!("'{}' is not in the shielding catalog", shielding))
            })
    }

    /// Entries in declared order.
    pub fn entries(&self) -> &'static [(Shielding, f64)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_factors_match_declared_values() {
        assert_eq!(SHIELDING_CATALOG.factor(Shielding::None), Ok(1.0));
        assert_eq!(SHIELDING_CATALOG.factor(Shielding::Aluminum), Ok(0.7));
        assert_eq!(SHIELDING_CATALOG.factor(Shielding::Polyethylene), Ok(0.5));
    }

    #[test]
    fn every_material_has_exactly_one_catalog_entry() {
        assert_eq!(SHIELDING_CATALOG.len(), Shielding::iter().count());
        for material in Shielding::iter() {
            let hits = SHIELDING_CATALOG
                .entries()
                .iter()
                .filter(|(m, _)| *m == material)
                .count();
            assert_eq!(hits, 1, "{material} should appear once");
        }
    }

    #[test]
    fn catalog_order_is_none_aluminum_polyethylene() {
        let order: Vec<Shielding> = SHIELDING_CATALOG.entries().iter().map(|(m, _)| *m).collect();
        assert_eq!(
            order,
            vec![Shielding::None, Shielding::Aluminum, Shielding::Polyethylene]
        );
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Shielding::from_name("Aluminum"), Ok(Shielding::Aluminum));
        assert_eq!(Shielding::from_name("polyethylene"), Ok(Shielding::Polyethylene));
        assert_eq!(Shielding::from_name(" none "), Ok(Shielding::None));
        assert_eq!(Shielding::Aluminum.to_string(), "Aluminum");
    }

    #[test]
    fn unknown_material_is_invalid_input() {
        let err = Shielding::from_name("Lead").unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput(_)));
    }
}
