//! CLI entry point for the EDA profiling toolkit.

use anyhow::{Result, anyhow};
use clap::Parser;
use eda_profiling::{
    Profiler, ProfilerConfig, ReportGenerator, RunReport, TableReportEntry, loader,
};
use std::path::Path;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "CSV dataset profiling toolkit",
    long_about = "Profiles every CSV file in an input directory and writes structure,\n\
                  summary-statistics and outlier report tables to an output directory.\n\n\
                  EXAMPLES:\n  \
                  # Profile ./data/raw into ./data/processed\n  \
                  eda-profiling\n\n  \
                  # Custom locations\n  \
                  eda-profiling -i ./incoming -o ./reports\n\n  \
                  # Wider outlier bounds, matching older deployments\n  \
                  eda-profiling --iqr-multiplier 3.0\n\n  \
                  # Machine-readable output\n  \
                  eda-profiling --json | jq '.tables[0].profile.row_count'"
)]
struct Args {
    /// Directory containing the CSV files to profile
    #[arg(short, long, default_value = "./data/raw")]
    input: String,

    /// Output directory for the report tables
    #[arg(short, long, default_value = "./data/processed")]
    output: String,

    /// IQR multiplier for the outlier bounds
    #[arg(long, default_value = "1.5")]
    iqr_multiplier: f64,

    /// Keep identifier-looking numeric columns in the statistics and
    /// outlier reports
    #[arg(long)]
    include_id_columns: bool,

    /// Minimum fraction of parseable values for a string column to be
    /// treated as numeric (0.0 - 1.0)
    #[arg(long, default_value = "0.9")]
    coercion_threshold: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the full report as JSON to stdout instead of a summary
    ///
    /// Disables all progress logs; only outputs the final JSON report.
    #[arg(long)]
    json: bool,

    /// Also write the full JSON report to the output directory
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).is_dir() {
        return Err(anyhow!("Input directory not found: {}", args.input));
    }

    let config = ProfilerConfig::builder()
        .raw_dir(&args.input)
        .processed_dir(&args.output)
        .iqr_multiplier(args.iqr_multiplier)
        .exclude_id_columns(!args.include_id_columns)
        .numeric_coercion_threshold(args.coercion_threshold)
        .emit_json_report(args.emit_report)
        .build()?;

    let files = loader::discover_csv_files(&config.raw_dir)?;
    if files.is_empty() {
        warn!("no CSV files found in {}", config.raw_dir.display());
    } else {
        info!("profiling {} table(s) from {}", files.len(), config.raw_dir.display());
    }

    let profiler = Profiler::new(config.clone());
    let mut entries = Vec::new();

    for path in &files {
        // One bad table must not abort the whole run
        match profile_file(&profiler, &config, path) {
            Ok(entry) => {
                info!(
                    "profiled {}: {} rows x {} columns, {} duplicate(s)",
                    entry.meta.name,
                    entry.profile.row_count,
                    entry.profile.column_count,
                    entry.profile.duplicates.duplicate_count
                );
                entries.push(entry);
            }
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
            }
        }
    }

    let generator = ReportGenerator::new(&config.processed_dir);
    let paths = generator.write_all(&entries)?;

    let report = RunReport::new(config.raw_dir.to_string_lossy(), entries);
    if config.emit_json_report {
        generator.write_json_report(&report)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_run_summary(&report, &paths);
    Ok(())
}

/// Load, coerce and profile a single CSV file.
fn profile_file(
    profiler: &Profiler,
    config: &ProfilerConfig,
    path: &Path,
) -> Result<TableReportEntry> {
    let meta = loader::table_meta(path)?;
    let df = loader::load_csv(path)?;
    let (df, converted) = loader::coerce_numeric_columns(df, config.numeric_coercion_threshold)?;
    if !converted.is_empty() {
        info!("{}: coerced {} column(s) to numeric", meta.name, converted.len());
    }

    let profile = profiler.profile_dataset(&df)?;
    Ok(TableReportEntry { meta, profile })
}

/// Print a human-readable summary of the run.
///
/// Uses `println!` intentionally for user-facing CLI output; unlike
/// logging, this should always be visible regardless of log level.
fn print_run_summary(report: &RunReport, report_paths: &[std::path::PathBuf]) {
    println!();
    println!("{}", "=".repeat(80));
    println!("EDA PROFILING COMPLETE");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "{:<24} {:>8} {:>8} {:>10} {:>8} {:>10}",
        "Table", "Rows", "Columns", "Duplicates", "Nulls", "Outliers"
    );
    println!("{}", "-".repeat(74));

    for entry in &report.tables {
        let outlier_count: usize = entry
            .profile
            .outliers
            .iter()
            .map(|o| o.indices.len())
            .sum();
        println!(
            "{:<24} {:>8} {:>8} {:>10} {:>8} {:>10}",
            truncate_str(&entry.meta.name, 23),
            entry.profile.row_count,
            entry.profile.column_count,
            entry.profile.duplicates.duplicate_count,
            entry.profile.total_null_count,
            outlier_count
        );
    }
    println!();

    println!("Reports written:");
    for path in report_paths {
        println!("  - {}", path.display());
    }
    println!();
    println!("Use --json for machine-readable output");
    println!("Use --emit-report to also save the JSON report file");
    println!("{}", "=".repeat(80));
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
