use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use module_range_validator::{ValidationJob, ValidatorConfig};

#[derive(Debug, Parser)]
#[command(
    name = "module-range-validator",
    version,
    about = "Check CSV module ID ranges against a manifest's '$ Module ID Range' section"
)]
struct Cli {
    /// Manifest text file containing the '$ Module ID Range' section.
    manifest: PathBuf,

    /// CSV dataset with Items (or Component), Start and End columns.
    dataset: PathBuf,

    /// Where to write the annotated CSV (default: <dataset>_validated.csv).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding column names, section marker or output suffix.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the run summary as JSON on stdout.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ValidatorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };

    let job = ValidationJob {
        output_path: cli.output,
        config,
        ..ValidationJob::new(cli.manifest, cli.dataset)
    };

    let report = job.run().context("validation failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialising summary")?
        );
    } else {
        println!(
            "{} rows checked against {} manifest ranges: {} in range, {} out of range",
            report.summary.rows,
            report.manifest_entries,
            report.summary.in_range,
            report.summary.out_of_range
        );
        println!("Output written to {}", report.output_path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
