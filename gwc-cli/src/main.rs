//! GWC Reader CLI Application
//!
//! Command-line front end for the gwc-reader library. It adds:
//! - Dataset selection (file arguments, TOML config, or built-in defaults)
//! - Text report generation

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, DatasetConfig};

/// GWC Reader - Print Weibull wind statistics from GWC files
#[derive(Parser, Debug)]
#[command(name = "gwc")]
#[command(about = "Print Weibull wind statistics from GWC files", long_about = None)]
#[command(version)]
struct Args {
    /// GWC file(s) to report, labelled by file name
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to configuration file listing named datasets
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("GWC Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using reader library v{}", gwc_reader::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for dataset in resolve_datasets(&args)? {
        report_dataset(&mut out, &dataset)?;
    }
    out.flush().context("Failed to write report")?;

    Ok(())
}

/// Pick the datasets to report: file arguments, then config file, then defaults
fn resolve_datasets(args: &Args) -> Result<Vec<DatasetConfig>> {
    if !args.files.is_empty() {
        if args.config.is_some() {
            log::warn!("File arguments given, ignoring --config");
        }
        return Ok(args
            .files
            .iter()
            .cloned()
            .map(DatasetConfig::from_path)
            .collect());
    }

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => {
            log::debug!("No input specified, using built-in datasets");
            AppConfig::default_datasets()
        }
    };

    Ok(config.datasets)
}

/// Parse one dataset completely, then write it to `out` under its label
fn report_dataset<W: Write>(out: &mut W, dataset: &DatasetConfig) -> Result<()> {
    let parsed = gwc_reader::parse_gwc_file(&dataset.path)
        .with_context(|| format!("Failed to load {} data", dataset.name))?;

    writeln!(out, "{} data:", dataset.name).context("Failed to write report")?;
    report::write_dataset(out, &parsed).context("Failed to write report")?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
