//! CLI entry point for the bikeshare statistics explorer.
//!
//! Prompts for a city, month and day, prints the four trip reports over the
//! filtered data, and offers to start over.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bikeshare_stats::input::Prompter;
use bikeshare_stats::output::OutputFormat;
use bikeshare_stats::session::{self, SessionConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// How reports are rendered
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not print how long each report took
    #[arg(long, default_value_t = false)]
    no_timing: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: quiet stderr (prompts share the terminal) + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = SessionConfig {
        data_dir: cli.data_dir,
        format: cli.format,
        show_timing: !cli.no_timing,
    };
    info!(data_dir = %config.data_dir.display(), format = ?config.format, "Starting session");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    session::run(&config, &mut prompter).with_context(|| {
        format!(
            "bikeshare session failed (data directory: {})",
            config.data_dir.display()
        )
    })?;

    Ok(())
}
