//! Pruefsiegel CLI
//!
//! Writes the seal SVG to `svgfile`. With `--json` a summary of the written
//! seal goes to stdout; logs go to stderr (filter via RUST_LOG).
//!
//! Exit codes: 0 success, 1 write failure, 2 bad arguments or configuration.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use pruefsiegel::{
    config::{SealConfig, DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS, DEFAULT_START_YEAR},
    SealError, SealPipeline, ENGINE_VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "pruefsiegel")]
#[command(about = "Render a round month/year inspection seal as SVG")]
struct Cli {
    /// Outer radius
    #[arg(short = 'R', long, value_name = "mm", default_value_t = DEFAULT_OUTER_RADIUS)]
    outer_radius: f64,

    /// Inner radius
    #[arg(short = 'r', long, value_name = "mm", default_value_t = DEFAULT_INNER_RADIUS)]
    inner_radius: f64,

    /// Start year.
    #[arg(short = 'y', long, value_name = "YEAR", default_value_t = DEFAULT_START_YEAR, allow_negative_numbers = true)]
    start_year: i64,

    /// Print the year light on dark.
    #[arg(short = 'Y', long)]
    year_inverse: bool,

    /// Center Text
    #[arg(short = 't', long)]
    center_text: Option<String>,

    /// Print a JSON summary of the written seal to stdout
    #[arg(long)]
    json: bool,

    /// Output SVG file
    svgfile: PathBuf,
}

impl Cli {
    fn seal_config(&self) -> SealConfig {
        SealConfig {
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            start_year: self.start_year,
            year_inverse: self.year_inverse,
            center_text: self.center_text.clone(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    debug!(version = ENGINE_VERSION, ?cli, "starting");

    let config = cli.seal_config();
    let seal = match SealPipeline::new().write(&config, &cli.svgfile) {
        Ok(seal) => seal,
        Err(e @ SealError::InvalidConfig(_)) => {
            error!("{e}");
            return ExitCode::from(2);
        }
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&seal.summary(&cli.svgfile)) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
