//! AHMA CLI — compute, sweep, and export commands.
//!
//! Commands:
//! - `run` — generate the synthetic series, compute the AHMA dataset, print a
//!   summary, and optionally write dataset/zones/metrics artifacts
//! - `sweep` — evaluate a grid of (base period, sensitivity) pairs in parallel

use ahma_core::blend::RollingMaxNormalizer;
use ahma_core::config::{ChartConfig, EngineParams};
use ahma_core::dataset::{
    compute_ahma_dataset, compute_ahma_dataset_with, first_warm_index,
};
use ahma_core::domain::{IndicatorPoint, MetricsReport, TrendZone};
use ahma_core::metrics::compute_metrics;
use ahma_core::series::generate_price_series;
use ahma_core::zones::compute_trend_zones;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "ahma",
    about = "AHMA CLI — adaptive Hull moving average engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the AHMA dataset and print a summary.
    Run {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Series length in bars.
        #[arg(long)]
        length: Option<usize>,

        /// Generator seed.
        #[arg(long)]
        seed: Option<f64>,

        /// Hull base period (14-120).
        #[arg(long)]
        period: Option<f64>,

        /// Adaptive sensitivity (0.10-0.85).
        #[arg(long)]
        sensitivity: Option<f64>,

        /// Normalize volatility against a trailing window of this many bars
        /// instead of the whole series.
        #[arg(long)]
        rolling_window: Option<usize>,

        /// Write dataset.json, dataset.csv, zones.json, metrics.json here.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Evaluate a grid of (base period, sensitivity) pairs.
    Sweep {
        /// Base periods to test.
        #[arg(long, value_delimiter = ',', default_value = "14,28,55,90,120")]
        periods: Vec<f64>,

        /// Sensitivities to test.
        #[arg(long, value_delimiter = ',', default_value = "0.10,0.35,0.60,0.85")]
        sensitivities: Vec<f64>,

        /// Series length in bars.
        #[arg(long, default_value_t = 220)]
        length: usize,

        /// Generator seed.
        #[arg(long, default_value_t = 35.0)]
        seed: f64,

        /// Write the sweep table as CSV to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            length,
            seed,
            period,
            sensitivity,
            rolling_window,
            output_dir,
        } => run_cmd(
            config,
            length,
            seed,
            period,
            sensitivity,
            rolling_window,
            output_dir,
        ),
        Commands::Sweep {
            periods,
            sensitivities,
            length,
            seed,
            output,
        } => sweep_cmd(periods, sensitivities, length, seed, output),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_cmd(
    config_path: Option<PathBuf>,
    length: Option<usize>,
    seed: Option<f64>,
    period: Option<f64>,
    sensitivity: Option<f64>,
    rolling_window: Option<usize>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    if let Some(v) = length {
        config.series.length = v;
    }
    if let Some(v) = seed {
        config.series.seed = v;
    }
    if let Some(v) = period {
        config.engine.base_period = v;
    }
    if let Some(v) = sensitivity {
        config.engine.sensitivity = v;
    }

    let params = config.engine.clamped();
    let series = generate_price_series(config.series.length, config.series.seed);

    let dataset = match rolling_window {
        Some(window) => {
            compute_ahma_dataset_with(&series, &params, &RollingMaxNormalizer { window })
        }
        None => compute_ahma_dataset(&series, &params),
    };

    let zones = compute_trend_zones(&dataset);
    let report = compute_metrics(&dataset);

    print_summary(&params, &dataset, &zones, &report);

    if let Some(dir) = output_dir {
        save_artifacts(&dir, &dataset, &zones, &report)?;
        println!("Artifacts saved to: {}", dir.display());
    }

    Ok(())
}

fn print_summary(
    params: &EngineParams,
    dataset: &[IndicatorPoint],
    zones: &[TrendZone],
    report: &MetricsReport,
) {
    let warmup = first_warm_index(dataset).unwrap_or(dataset.len());

    println!();
    println!("=== AHMA Dataset ===");
    if let (Some(first), Some(last)) = (dataset.first(), dataset.last()) {
        println!("Period:         {} to {}", first.label, last.label);
    }
    println!("Bars:           {} ({} warm-up)", dataset.len(), warmup);
    println!("Base period:    {:.0}", params.base_period);
    println!("Sensitivity:    {:.2}", params.sensitivity);
    println!();
    println!("--- Metrics ---");
    println!("Current bias:   {}", fmt_bias(report));
    println!("Slope (8):      {}", fmt_opt_pct(report.slope_percent));
    println!("Pullback z:     {}", fmt_opt_num(report.pullback_z));
    println!();
    println!("--- Trend zones ({}) ---", zones.len());
    println!("{:<12} {:<12} {:<8} {:>5}", "Start", "End", "Bias", "Bars");
    println!("{}", "-".repeat(40));
    for zone in zones {
        println!(
            "{:<12} {:<12} {:<8} {:>5}",
            zone.start_label,
            zone.end_label,
            zone.bias.as_str(),
            zone.span()
        );
    }
    println!();
}

fn fmt_bias(report: &MetricsReport) -> String {
    report
        .bias
        .map(|b| b.to_string())
        .unwrap_or_else(|| "n/a".into())
}

fn fmt_opt_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:+.2}%"))
        .unwrap_or_else(|| "n/a".into())
}

fn fmt_opt_num(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:+.3}"))
        .unwrap_or_else(|| "n/a".into())
}

fn save_artifacts(
    dir: &Path,
    dataset: &[IndicatorPoint],
    zones: &[TrendZone],
    report: &MetricsReport,
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    write_json(&dir.join("dataset.json"), dataset)?;
    write_json(&dir.join("zones.json"), zones)?;
    write_json(&dir.join("metrics.json"), report)?;
    write_dataset_csv(&dir.join("dataset.csv"), dataset)?;

    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_dataset_csv(path: &Path, dataset: &[IndicatorPoint]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(["date", "close", "ahma", "bias"])?;
    for point in dataset {
        wtr.write_record([
            point.label.clone(),
            format!("{:.2}", point.close),
            point.ahma.map(|v| format!("{v:.4}")).unwrap_or_default(),
            point.bias.map(|b| b.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

struct SweepRow {
    base_period: f64,
    sensitivity: f64,
    warmup: usize,
    zone_count: usize,
    report: MetricsReport,
}

fn sweep_cmd(
    periods: Vec<f64>,
    sensitivities: Vec<f64>,
    length: usize,
    seed: f64,
    output: Option<PathBuf>,
) -> Result<()> {
    let series = generate_price_series(length, seed);

    let grid: Vec<(f64, f64)> = periods
        .iter()
        .flat_map(|&p| sensitivities.iter().map(move |&s| (p, s)))
        .collect();

    let rows: Vec<SweepRow> = grid
        .par_iter()
        .map(|&(base_period, sensitivity)| {
            let params = EngineParams::new(base_period, sensitivity);
            let dataset = compute_ahma_dataset(&series, &params);
            SweepRow {
                base_period: params.base_period,
                sensitivity: params.sensitivity,
                warmup: first_warm_index(&dataset).unwrap_or(dataset.len()),
                zone_count: compute_trend_zones(&dataset).len(),
                report: compute_metrics(&dataset),
            }
        })
        .collect();

    println!();
    println!("=== Sweep ({} bars, seed {seed}) ===", length);
    println!(
        "{:>7} {:>11} {:>7} {:>6} {:>9} {:>10} {:>10}",
        "Period", "Sensitivity", "Warmup", "Zones", "Bias", "Slope", "Pullback"
    );
    println!("{}", "-".repeat(66));
    for row in &rows {
        println!(
            "{:>7.0} {:>11.2} {:>7} {:>6} {:>9} {:>10} {:>10}",
            row.base_period,
            row.sensitivity,
            row.warmup,
            row.zone_count,
            fmt_bias(&row.report),
            fmt_opt_pct(row.report.slope_percent),
            fmt_opt_num(row.report.pullback_z),
        );
    }
    println!();

    if let Some(path) = output {
        write_sweep_csv(&path, &rows)?;
        println!("Sweep table saved to: {}", path.display());
    }

    Ok(())
}

fn write_sweep_csv(path: &Path, rows: &[SweepRow]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record([
        "base_period",
        "sensitivity",
        "warmup",
        "zones",
        "bias",
        "slope_percent",
        "pullback_z",
    ])?;
    for row in rows {
        wtr.write_record([
            format!("{:.0}", row.base_period),
            format!("{:.2}", row.sensitivity),
            row.warmup.to_string(),
            row.zone_count.to_string(),
            row.report
                .bias
                .map(|b| b.to_string())
                .unwrap_or_default(),
            row.report
                .slope_percent
                .map(|v| format!("{v:.6}"))
                .unwrap_or_default(),
            row.report
                .pullback_z
                .map(|v| format!("{v:.6}"))
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
