//! Headless fee comparison report
//!
//! Runs one analysis pass and prints the chart payload instead of drawing it.
//!
//! # Usage
//! ```sh
//! cargo run --bin report -- --downloads 250 --small-business yes --format table
//! cargo run --bin report -- --scenario scenario.toml --every 100
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use feescope::application::{AnalysisReport, ChargeAnalysis};
use feescope::config::{Config, ScenarioFile};
use feescope::domain::charges::{BillingPeriod, YesNo};
use feescope::domain::intersection::IntersectionStrategy;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser)]
#[command(author, version, about = "Current vs. proposed service charge report", long_about = None)]
struct Cli {
    /// TOML file with scenario overrides
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Yearly downloads (millions)
    #[arg(short, long)]
    downloads: Option<f64>,

    /// Upper bound of the revenue axis ($ Million)
    #[arg(long)]
    max_revenue: Option<f64>,

    /// Number of revenue samples
    #[arg(long)]
    samples: Option<usize>,

    /// Small business program (Yes/No)
    #[arg(long)]
    small_business: Option<String>,

    /// Alternate payment processing (Yes/No)
    #[arg(long)]
    alternate_payment: Option<String>,

    /// Third-party store distribution (Yes/No)
    #[arg(long)]
    third_party_store: Option<String>,

    /// Billing period (yearly, monthly)
    #[arg(long)]
    period: Option<String>,

    /// Crossing detection (tolerance, bracketing, bracketing-raw)
    #[arg(long)]
    strategy: Option<String>,

    /// Tolerance for the tolerance strategy
    #[arg(long)]
    tolerance: Option<f64>,

    /// Emit every Nth sample only
    #[arg(long, default_value = "1")]
    every: usize,

    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let mut request = config.to_analysis_request(config.default_scenario());

    if let Some(path) = &cli.scenario {
        info!("Loading scenario from: {}", path.display());
        ScenarioFile::load(path)?.apply(&mut request, config.tolerance)?;
    }

    if let Some(downloads) = cli.downloads {
        request.scenario.downloads = downloads;
    }
    if let Some(max_revenue) = cli.max_revenue {
        request.max_revenue = max_revenue;
    }
    if let Some(samples) = cli.samples {
        request.sample_count = samples;
    }
    if let Some(answer) = &cli.small_business {
        request.scenario.small_business_program = parse_answer(answer, "--small-business")?;
    }
    if let Some(answer) = &cli.alternate_payment {
        request.scenario.alternate_payment_processing =
            parse_answer(answer, "--alternate-payment")?;
    }
    if let Some(answer) = &cli.third_party_store {
        request.scenario.third_party_store = parse_answer(answer, "--third-party-store")?;
    }
    if let Some(period) = &cli.period {
        request.scenario.period = BillingPeriod::from_str(period)?;
    }
    if let Some(strategy) = &cli.strategy {
        let carried = request.strategy.epsilon().unwrap_or(config.tolerance);
        request.strategy = IntersectionStrategy::parse_with_tolerance(strategy, carried)?;
    }
    if let Some(tolerance) = cli.tolerance {
        request.strategy = request.strategy.with_tolerance(tolerance);
    }

    let report = ChargeAnalysis::run(&request)
        .context("Scenario rejected")?
        .with_sample_stride(cli.every);

    match report.intersection {
        Some(point) => info!(
            "Break-even at revenue ${:.2} M, fee ${:.2} M",
            point.revenue, point.fee
        ),
        None => info!("No break-even point within $0 - ${} M", request.max_revenue),
    }

    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
        OutputFormat::Table => print_table(&report),
    }

    Ok(())
}

fn parse_answer(value: &str, flag: &str) -> Result<bool> {
    Ok(YesNo::from_str(value)
        .context(format!("Invalid value for {}", flag))?
        .is_yes())
}

fn print_table(report: &AnalysisReport) {
    println!("{}", report.metadata.title);
    println!("{}", "=".repeat(80));
    println!("Current:  {}", report.current.name);
    println!("Proposed: {}", report.proposed.name);
    println!("Strategy: {}", report.strategy);
    match report.intersection {
        Some(point) => println!(
            "Break-even: revenue ${:.2} M, fee ${:.2} M",
            point.revenue, point.fee
        ),
        None => println!("Break-even: none in range"),
    }
    println!("{}", "-".repeat(80));
    println!(
        "{:>14} {:>14} {:>14} {:>10} {:>10}",
        "Revenue ($M)", "Current ($M)", "Proposed ($M)", "Cur. %", "Prop. %"
    );

    for (current, proposed) in report.current.samples.iter().zip(&report.proposed.samples) {
        println!(
            "{:>14.2} {:>14.2} {:>14.2} {:>9.2}% {:>9.2}%",
            current.revenue,
            current.fee,
            proposed.fee,
            current.fee_ratio * 100.0,
            proposed.fee_ratio * 100.0
        );
    }
}
