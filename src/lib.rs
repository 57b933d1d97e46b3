//! rSlotPay library root.
//! Exposes the slot store and calculator, plus the CLI front end built on them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let colors = cfg.use_colors && !cli.no_color;

    match &cli.command {
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd, colors),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg, colors),
        Some(cmd @ Commands::Calc { .. }) => cli::commands::calc::handle(cmd, cfg, colors),
        Some(cmd @ Commands::Shell { .. }) => cli::commands::shell::handle(Some(cmd), cfg, colors),
        None => cli::commands::shell::handle(None, cfg, colors),
    }
}

/// Logs go to stderr so they never mix with rendered output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RSLOTPAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = Config::load()?;

    dispatch(&cli, &cfg)
}
