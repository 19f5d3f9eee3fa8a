// Dose/risk computation pipeline
pub mod distribution;
pub mod dose_calculator;
pub mod report;

// Re-export commonly used items
pub use distribution::{
    DistributionSummary, HistogramBin, histogram, summarize, synthetic_dose_samples,
};
pub use dose_calculator::{base_dose_per_day, comparison_table, compute};
pub use report::RiskReport;
