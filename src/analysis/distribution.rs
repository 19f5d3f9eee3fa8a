//! Illustrative dose spread for the histogram.
//!
//! This is display noise around the point estimate, not a physical Monte Carlo
//! model. Samples are not clamped: a small total dose can produce negatives.

use rand::Rng;
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;
use statrs::statistics::Statistics;

use crate::config::DOSE_MODEL;
use crate::utils::maths_utils::{RangeF64, get_min_max};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Draw `count` samples from Normal(total_dose, spread * total_dose).
/// The generator is injected so callers can seed it.
pub fn synthetic_dose_samples<R: Rng + ?Sized>(
    total_dose: f64,
    count: usize,
    rng: &mut R,
) -> Vec<f64> {
    let std_dev = total_dose * DOSE_MODEL.synthetic.relative_spread;
    match Normal::new(total_dose, std_dev) {
        Ok(normal) => (0..count).map(|_| normal.sample(rng)).collect(),
        // Zero spread (zero dose) is a degenerate normal: every draw is the mean
        Err(_) => vec![total_dose; count],
    }
}

pub fn summarize(samples: &[f64]) -> Option<DistributionSummary> {
    if samples.is_empty() {
        return None;
    }
    let (min, max) = get_min_max(samples);
    let std_dev = if samples.len() > 1 {
        samples.iter().std_dev()
    } else {
        0.0
    };
    Some(DistributionSummary {
        count: samples.len(),
        mean: samples.iter().mean(),
        std_dev,
        min,
        max,
    })
}

/// Equal-width bins spanning [min, max]; the max sample lands in the last bin.
pub fn histogram(samples: &[f64], bins: usize) -> Vec<HistogramBin> {
    if samples.is_empty() || bins == 0 {
        return Vec::new();
    }
    let (min, max) = get_min_max(samples);
    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: samples.len(),
        }];
    }

    let range = RangeF64::new(min, max, bins);
    let mut counts = vec![0usize; range.n_chunks()];
    for &value in samples {
        counts[range.chunk_index(value)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| {
            let (lower, upper) = range.chunk_bounds(index);
            HistogramBin {
                lower,
                upper,
                count,
            }
        })
        .collect()
}
