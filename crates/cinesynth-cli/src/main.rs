mod logging;
mod paths;
mod settings;

use std::path::{Path, PathBuf};

use cinesynth_generate::{GenerateOptions, GenerationEngine, GenerationError};
use clap::Parser;
use logging::init_logging;
use paths::resolve_output_dir;
use settings::{Settings, SettingsError, load_settings};
use thiserror::Error;

const COMPLETION_MESSAGE: &str = "Datasets generated and saved to CSV files.";

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "cinesynth",
    version,
    about = "Generate synthetic title and credit datasets as CSV"
)]
struct Cli {
    /// TOML settings file (defaults to ./cinesynth.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of titles to generate.
    #[arg(long)]
    title_count: Option<usize>,
    /// Number of credits to generate.
    #[arg(long)]
    credit_count: Option<usize>,
    /// Destination directory for the CSV files.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Also write generation_report.json.
    #[arg(long, default_value_t = false)]
    report: bool,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, default_value_t = false)]
    log_json: bool,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json, cli.log_file.as_deref())?;

    let cwd = std::env::current_dir()?;
    let settings = load_settings(cli.config.as_deref(), &cwd)?;
    let options = generate_options(&cli, settings, &cwd);

    let engine = GenerationEngine::new(options)?;
    engine.run()?;

    println!("{COMPLETION_MESSAGE}");
    Ok(())
}

/// Command-line flags take precedence over the settings file.
fn generate_options(cli: &Cli, settings: Settings, cwd: &Path) -> GenerateOptions {
    let output_dir = cli.output_dir.clone().or(settings.output_dir);
    GenerateOptions {
        title_count: cli.title_count.unwrap_or(settings.title_count),
        credit_count: cli.credit_count.unwrap_or(settings.credit_count),
        out_dir: resolve_output_dir(output_dir.as_deref(), cwd),
        write_report: cli.report || settings.write_report,
    }
}
