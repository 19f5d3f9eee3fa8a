//! Closed-form dose and risk estimate.
//!
//! ```text
//! base_dose_per_day = flux * 0.00005
//! daily_dose        = base_dose_per_day * shield_factor
//! total_dose        = daily_dose * duration_days      (mSv)
//! risk_percent      = total_dose / 1000 * 5           (linear ERR)
//! xray_equivalent   = total_dose / 0.1
//! ```

use crate::config::DOSE_MODEL;
use crate::domain::{MissionParameters, SHIELDING_CATALOG};
use crate::error::{Result, RiskError};
use crate::models::{DoseEstimate, RiskCategory, ShieldingComparisonRow};

/// Unshielded dose per day (mSv) for a given flux.
pub fn base_dose_per_day(flux: f64) -> f64 {
    flux * DOSE_MODEL.dose_per_flux_msv
}

pub fn compute(flux: f64, params: &MissionParameters) -> Result<DoseEstimate> {
    validate_flux(flux)?;
    params.validate()?;

    let base_dose_per_day = base_dose_per_day(flux);
    let shield_factor = SHIELDING_CATALOG.factor(params.shielding())?;
    let daily_dose = base_dose_per_day * shield_factor;
    let total_dose = daily_dose * params.duration_days() as f64;
    let risk_percent = (total_dose / DOSE_MODEL.msv_per_sv) * DOSE_MODEL.risk_percent_per_sv;
    let xray_equivalent = total_dose / DOSE_MODEL.chest_xray_msv;

    Ok(DoseEstimate {
        base_dose_per_day,
        daily_dose,
        total_dose,
        risk_percent,
        xray_equivalent,
        category: RiskCategory::from_risk_percent(risk_percent),
    })
}

/// Per-day dose for every catalog material at the same base dose.
/// Independent of mission duration; rows follow catalog order.
pub fn comparison_table(base_dose_per_day: f64) -> Vec<ShieldingComparisonRow> {
    SHIELDING_CATALOG
        .entries()
        .iter()
        .map(|&(shielding, factor)| ShieldingComparisonRow {
            shielding,
            factor,
            daily_dose: base_dose_per_day * factor,
        })
        .collect()
}

fn validate_flux(flux: f64) -> Result<()> {
    if !flux.is_finite() || flux < 0.0 {
        return Err(RiskError::InvalidInput(format!(
            "flux must be a finite non-negative number, got {}",
            flux
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Shielding;
    use strum::IntoEnumIterator;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn params(days: u32, shielding: Shielding) -> MissionParameters {
        MissionParameters::new(days, shielding).unwrap()
    }

    #[test]
    fn six_month_aluminum_mission_at_default_flux() {
        let estimate = compute(100.0, &params(180, Shielding::Aluminum)).unwrap();

        assert!(approx_eq(estimate.base_dose_per_day, 0.005));
        assert!(approx_eq(estimate.daily_dose, 0.0035));
        assert!(approx_eq(estimate.total_dose, 0.63));
        assert!(approx_eq(estimate.risk_percent, 0.00315));
        assert!(approx_eq(estimate.xray_equivalent, 6.3));
        assert_eq!(estimate.xray_equivalent.round(), 6.0);
        assert_eq!(estimate.category, RiskCategory::Low);
    }

    #[test]
    fn identical_inputs_give_bit_identical_estimates() {
        let p = params(365, Shielding::Polyethylene);
        let a = compute(1234.5, &p).unwrap();
        let b = compute(1234.5, &p).unwrap();
        assert_eq!(a.total_dose.to_bits(), b.total_dose.to_bits());
        assert_eq!(a.risk_percent.to_bits(), b.risk_percent.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn dose_and_risk_strictly_increase_with_duration() {
        for shielding in Shielding::iter() {
            let mut previous = compute(50.0, &params(1, shielding)).unwrap();
            for days in [2, 10, 180, 999, 1000] {
                let next = compute(50.0, &params(days, shielding)).unwrap();
                assert!(next.total_dose > previous.total_dose);
                assert!(next.risk_percent > previous.risk_percent);
                previous = next;
            }
        }
    }

    #[test]
    fn daily_dose_follows_shield_factor_ordering() {
        let dose = |s| compute(500.0, &params(30, s)).unwrap().daily_dose;
        let poly = dose(Shielding::Polyethylene);
        let alu = dose(Shielding::Aluminum);
        let none = dose(Shielding::None);
        assert!(poly < alu && alu < none);
    }

    #[test]
    fn large_flux_reaches_high_category() {
        let estimate = compute(1_000_000.0, &params(1000, Shielding::None)).unwrap();
        assert!(estimate.risk_percent >= 5.0);
        assert_eq!(estimate.category, RiskCategory::High);
    }

    #[test]
    fn zero_flux_is_a_valid_input() {
        let estimate = compute(0.0, &params(10, Shielding::None)).unwrap();
        assert_eq!(estimate.total_dose, 0.0);
        assert_eq!(estimate.category, RiskCategory::Low);
    }

    #[test]
    fn rejects_negative_or_non_finite_flux() {
        let p = params(10, Shielding::None);
        for flux in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(compute(flux, &p), Err(RiskError::InvalidInput(_))));
        }
    }

    #[test]
    fn comparison_table_covers_catalog_independent_of_duration() {
        let short = compute(200.0, &params(1, Shielding::Aluminum)).unwrap();
        let long = compute(200.0, &params(1000, Shielding::Aluminum)).unwrap();
        let table = comparison_table(short.base_dose_per_day);

        assert_eq!(table, comparison_table(long.base_dose_per_day));
        assert_eq!(table.len(), SHIELDING_CATALOG.len());
        for (row, (material, factor)) in table.iter().zip(SHIELDING_CATALOG.entries()) {
            assert_eq!(row.shielding, *material);
            assert_eq!(row.factor, *factor);
            assert_eq!(row.daily_dose, short.base_dose_per_day * factor);
        }
        // The selected material's row matches the estimate itself
        assert_eq!(table[1].daily_dose, short.daily_dose);
    }
}
