use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::{GameConfig, GameState};
use sapper_cli::{Format, Session};
use tracing_subscriber::EnvFilter;

/// Minesweeper on a 16x16 board with 40 mines.
///
/// Commands, one per line: `reveal X Y`, `flag X Y`,
/// `click left|right PX PY`, `new`, `quit`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How each frame is written to stdout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn init_logging(verbosity: &Verbosity<WarnLevel>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbosity)?;

    let config = GameConfig::standard().context("invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting with seed {seed}");

    let mut session = Session::new(GameState::with_seed(config, seed), args.format);
    let (width, height) = session.viewport().window_size();
    log::debug!("Board surface is {width}x{height} px");

    session.run(io::stdin().lock(), io::stdout().lock())
}
