//! optgrid - closed-form option pricing reports
//!
//! Console entry point. Tables go to stdout, logs to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use optgrid_cli::commands;
use optgrid_cli::config::{build_config, CliArgs};
use optgrid_risk::grid::Measure;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Closed-form European and perpetual American option reports
#[derive(Parser, Debug)]
#[command(name = "optgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "OPTGRID_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decimals for European price matrices
    #[arg(long, global = true)]
    price_precision: Option<usize>,

    /// Decimals for Greeks, parity, ladders and perpetual output
    #[arg(long, global = true)]
    greek_precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check put-call parity for the configured batch
    Parity,

    /// European call and put prices over the spot mesh
    Ladder,

    /// Strike x volatility matrices per expiry
    Matrix {
        /// Measure to tabulate (price, delta, gamma); all three when omitted
        #[arg(short, long)]
        measure: Option<Measure>,
    },

    /// Analytic vs finite-difference Delta and Gamma
    Greeks,

    /// Prices and Greeks over the spot mesh
    Sensitivities {
        /// Use central differences instead of closed forms
        #[arg(long)]
        approx: bool,
    },

    /// Perpetual American ladder and price matrices
    Perpetual,

    /// Every report in sequence
    Run,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            price_precision: cli.price_precision,
            greek_precision: cli.greek_precision,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli)).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        log_level = %config.log_level,
        command = ?cli.command,
        "optgrid v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Parity => commands::parity::run(&config, &mut out),
        Commands::Ladder => commands::ladder::run(&config, &mut out),
        Commands::Matrix { measure } => commands::matrix::run(&config, measure, &mut out),
        Commands::Greeks => commands::greeks::run(&config, &mut out),
        Commands::Sensitivities { approx } => {
            commands::sensitivities::run(&config, approx, &mut out)
        }
        Commands::Perpetual => commands::perpetual::run(&config, &mut out),
        Commands::Run => commands::run::run(&config, &mut out),
    };
    result.context("command failed")?;

    out.flush().context("failed to flush output")?;
    Ok(())
}
