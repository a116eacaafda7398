#![forbid(unsafe_code)]

mod animation;
mod catalog;
mod color;
mod config;
mod constants;
mod filters;
mod gui;
mod onboarding;
mod simulate;
mod swipe;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level as TraceLevel, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use catalog::Hangout;
use config::Config;
use types::SwipeDirection;

#[derive(Parser)]
#[command(name = "knizo")]
#[command(about = "Swipe through campus hangouts", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop window (default)
    Gui {
        /// Start on the discover screen instead of sign-up
        #[arg(long)]
        skip_onboarding: bool,
    },
    /// Run the swipe controller headlessly over scripted button presses
    Simulate {
        /// Comma separated: yes, no, save
        #[arg(long, value_delimiter = ',', required = true)]
        actions: Vec<SwipeDirection>,

        /// Frame step in milliseconds
        #[arg(long, default_value_t = 16.0)]
        frame_ms: f32,
    },
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// Read the config before logging is up. Failures are reported once the
/// subscriber exists.
fn read_config(path: Option<&PathBuf>) -> (Config, Option<anyhow::Error>) {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

fn load_cards(config: &Config) -> Vec<Hangout> {
    let Some(path) = &config.hangouts_file else {
        return catalog::default_hangouts();
    };
    catalog::load_hangouts(path).unwrap_or_else(|err| {
        warn!(error = ?err, "Falling back to the built-in deck");
        catalog::default_hangouts()
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = read_config(cli.config.as_ref());

    // Flag, then environment, then config file
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| config.log_level.clone());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&log_level))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(err) = config_error {
        error!(error = ?err, "Failed to load config, using defaults");
    }
    info!("config={:#?}", config);

    let cards = load_cards(&config);

    match cli.command.unwrap_or(Command::Gui { skip_onboarding: false }) {
        Command::Gui { skip_onboarding } => gui::run_gui(config, cards, skip_onboarding),
        Command::Simulate { actions, frame_ms } => {
            let report = simulate::run(&config.swipe, cards, &actions, frame_ms)?;
            println!("{report}");
            Ok(())
        }
    }
}
