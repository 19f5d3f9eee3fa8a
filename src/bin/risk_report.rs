//! Headless estimate: one fetch, one computation, printed to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cosmic_risk::config::FluxClientConfig;
use cosmic_risk::models::FluxSource;
use cosmic_risk::ui::utils::{format_dose, format_flux, format_risk_percent, format_xray};
use cosmic_risk::utils::time_utils::format_utc;
use cosmic_risk::{
    MissionParameters, RiskReport, Shielding, fetch_flux_outcome, resolve_flux, select_provider,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a cosmic radiation risk estimate", long_about = None)]
struct Args {
    /// Mission duration in days
    #[arg(long, default_value_t = 180)]
    days: u32,

    /// Shielding material (None, Aluminum, Polyethylene)
    #[arg(long, default_value = "None")]
    shielding: String,

    /// Skip the live feed and use the default flux
    #[arg(long, default_value_t = false)]
    offline: bool,

    /// Seed for the synthetic dose samples
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    // Reject bad inputs before touching the network
    let shielding = Shielding::from_name(&args.shielding)?;
    let params = MissionParameters::new(args.days, shielding)?;

    let provider = select_provider(args.offline, FluxClientConfig::default());
    let outcome = fetch_flux_outcome(provider.as_ref()).await;
    let flux = resolve_flux(&outcome);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = RiskReport::build(flux, params, &mut rng).context("computing risk report")?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &RiskReport) {
    match &report.flux.source {
        FluxSource::Live { observed_at } => println!(
            "Flux (live, {}): {} protons/cm²/s/sr",
            format_utc(observed_at),
            format_flux(report.flux.value)
        ),
        FluxSource::Fallback { reason } => {
            println!(
                "Flux (fallback): {} protons/cm²/s/sr",
                format_flux(report.flux.value)
            );
            println!("  live data unavailable: {}", reason);
        }
    }

    let estimate = &report.estimate;
    println!(
        "Mission: {} days, shielding {}",
        report.params.duration_days(),
        report.params.shielding()
    );
    println!("Daily dose:     {} mSv/day", format_dose(estimate.daily_dose));
    println!("Total dose:     {} mSv", format_dose(estimate.total_dose));
    println!("Cancer risk:    {}", format_risk_percent(estimate.risk_percent));
    println!("Chest X-rays:   ~{}", format_xray(estimate.xray_equivalent));
    println!("Risk category:  {}", estimate.category);

    println!();
    println!("{:<14} {:>7} {:>14}", "Material", "Factor", "mSv/day");
    for row in &report.comparison {
        println!(
            "{:<14} {:>7.1} {:>14}",
            row.shielding.to_string(),
            row.factor,
            format_dose(row.daily_dose)
        );
    }

    if let Some(summary) = &report.summary {
        println!();
        println!(
            "Synthetic spread ({} samples): mean {} mSv, std dev {} mSv, range {} to {}",
            summary.count,
            format_dose(summary.mean),
            format_dose(summary.std_dev),
            format_dose(summary.min),
            format_dose(summary.max)
        );
    }
}
