use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::distribution::{
    DistributionSummary, HistogramBin, histogram, summarize, synthetic_dose_samples,
};
use crate::analysis::dose_calculator::{comparison_table, compute};
use crate::config::DOSE_MODEL;
use crate::domain::MissionParameters;
use crate::error::Result;
use crate::models::{DoseEstimate, ResolvedFlux, ShieldingComparisonRow};

/// Everything the presentation layer needs for one (flux, mission) pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RiskReport {
    pub flux: ResolvedFlux,
    pub params: MissionParameters,
    pub estimate: DoseEstimate,
    pub comparison: Vec<ShieldingComparisonRow>,
    pub samples: Vec<f64>,
    pub summary: Option<DistributionSummary>,
    pub histogram: Vec<HistogramBin>,
}

impl RiskReport {
    pub fn build<R: Rng + ?Sized>(
        flux: ResolvedFlux,
        params: MissionParameters,
        rng: &mut R,
    ) -> Result<Self> {
        let estimate = compute(flux.value, &params)?;
        let comparison = comparison_table(estimate.base_dose_per_day);
        let samples = synthetic_dose_samples(
            estimate.total_dose,
            DOSE_MODEL.synthetic.sample_count,
            rng,
        );
        let summary = summarize(&samples);
        let histogram = histogram(&samples, DOSE_MODEL.synthetic.histogram_bins);

        Ok(Self {
            flux,
            params,
            estimate,
            comparison,
            samples,
            summary,
            histogram,
        })
    }

    /// True when this report was computed from exactly these inputs.
    pub fn matches(&self, flux: &ResolvedFlux, params: &MissionParameters) -> bool {
        self.flux.value.to_bits() == flux.value.to_bits()
            && self.flux.source == flux.source
            && &self.params == params
    }
}
