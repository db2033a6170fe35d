//! CLI entry point for the bus checker skill.
//!
//! Answers "when is the next bus" for the configured school and station
//! stops, either directly or by handling a voice request envelope.

use anyhow::{Context, Result};
use bus_checker::{
    config::{Destination, SkillConfig},
    infra::keys::{Credentials, EnvKeyStore},
    infra::tfl::TflClient,
    skill::BusSkill,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bus_checker")]
#[command(about = "Tells you when the next buses leave for school or the station", long_about = None)]
struct Cli {
    /// JSON config file; built-in stops and defaults are used when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Next buses towards school
    School {
        /// How many buses to report (clamped to 1-10)
        #[arg(short = 'n', long)]
        count: Option<String>,
    },
    /// Next buses towards the station
    Station {
        /// How many buses to report (clamped to 1-10)
        #[arg(short = 'n', long)]
        count: Option<String>,
    },
    /// Next buses in both directions
    Both,
    /// Handle a voice request envelope and print the response envelope
    Handle {
        /// Request JSON file, or "-" for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        request: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bus_checker.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bus_checker.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SkillConfig::load(path)?,
        None => SkillConfig::default(),
    };
    debug!(?config, "Configuration loaded");

    let credentials = Credentials::resolve(&EnvKeyStore::new()).await?;
    let client = TflClient::from_config(&config, credentials).context("failed to build HTTP client")?;
    let skill = BusSkill::new(client, config);

    match cli.command {
        Commands::School { count } => {
            println!("{}", skill.check_destination(Destination::School, count.as_deref()).await);
        }
        Commands::Station { count } => {
            println!("{}", skill.check_destination(Destination::Station, count.as_deref()).await);
        }
        Commands::Both => {
            println!("{}", skill.check_both().await);
        }
        Commands::Handle { request } => {
            let body = read_request(&request)?;
            let response = skill.handle_json(&body).await;
            info!(end_session = response.should_end_session(), "Request handled");
            println!("{}", serde_json::to_string_pretty(&response.to_envelope())?);
        }
    }

    Ok(())
}

/// Reads a request body from a file path, or stdin for `-`.
fn read_request(source: &str) -> Result<String> {
    if source == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read request from stdin")?;
        Ok(body)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read request file {source}"))
    }
}
