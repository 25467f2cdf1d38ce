//! field-switcher
//!
//! Renders the story of a childhood dream that changed fields, under a
//! supervisor that handles termination signals and graceful shutdown.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags ──┐
//!               ▼
//!   config file → Config ──────────────┐
//!                                      ▼
//!   ┌──────────────────────── lifecycle supervisor ────────────────────────┐
//!   │  signals (1st) ─┐                                                     │
//!   │                 ├─▶ trigger ─▶ App::shutdown ─┬─ Ok       → exit 0    │
//!   │  App::run ──────┘    (timeout)                ├─ Err      → exit 1    │
//!   │                                               ├─ timeout  → exit 1    │
//!   │  signals (2nd) ───────────────────────────────┴─ forced   → exit 1    │
//!   └───────────────────────────────────────────────────────────────────────┘
//!                                      │
//!   App::run = dream → transform → present → format → stdout
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use field_switcher::config::{load_config, validate_config, Config};
use field_switcher::lifecycle::{run_with_graceful_shutdown, EXIT_FAILURE};
use field_switcher::observability::init_logging;
use field_switcher::FieldSwitcher;

#[derive(Parser)]
#[command(name = "field-switcher")]
#[command(about = "Tells how a footballer's dream moved to a new field", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target role: team_lead or developer.
    #[arg(short, long)]
    role: Option<String>,

    /// Bound on graceful shutdown, in seconds.
    #[arg(long)]
    shutdown_timeout_secs: Option<u64>,

    /// Prefix for lifecycle log lines; empty disables it.
    #[arg(long)]
    service_name: Option<String>,

    /// Disable ANSI colours.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(role) = &self.role {
            config.app.target_role = role.clone();
        }
        if let Some(secs) = self.shutdown_timeout_secs {
            config.lifecycle.shutdown_timeout_secs = secs;
        }
        if let Some(name) = &self.service_name {
            config.lifecycle.service_name = name.clone();
        }
        if self.no_color {
            config.app.color = false;
        }
    }
}

fn load(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    cli.apply(&mut config);
    validate_config(&config).map_err(field_switcher::config::ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = init_logging(&config.observability.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::info!(
        role = %config.app.target_role,
        shutdown_timeout_secs = config.lifecycle.shutdown_timeout_secs,
        service_name = %config.lifecycle.service_name,
        "Configuration loaded"
    );

    let app = match FieldSwitcher::from_settings(&config.app) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, code = %e.code(), "Failed to initialize application");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let code = run_with_graceful_shutdown(Arc::new(app), config.lifecycle.options()).await;
    std::process::exit(code);
}
