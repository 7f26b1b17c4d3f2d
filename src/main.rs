use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use connect_four_replay::config::AppConfig;
use connect_four_replay::game::{GameState, MoveSequencer, Player};
use connect_four_replay::ui::ConsoleView;

/// Replay a recorded Connect Four game and print who won.
#[derive(Parser)]
#[command(name = "connect-four-replay", about = "Replay a recorded Connect Four game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the configured moves, e.g. A_Red,B_Yellow
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<String>>,

    /// Print the grid after every move
    #[arg(long)]
    show_board: bool,

    /// Print a JSON report instead of console output
    #[arg(long)]
    json: bool,

    /// Log every applied move
    #[arg(short, long)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(serde::Serialize)]
struct ResolutionReport {
    outcome: GameState,
    winner: Option<Player>,
    moves_applied: usize,
    /// Top row first
    grid: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(moves) = cli.moves {
        app_config.moves = moves;
    }
    if cli.show_board {
        app_config.view.show_board = true;
    }

    let mut sequencer = MoveSequencer::new();
    if !cli.json {
        sequencer.add_observer(Box::new(ConsoleView::stdout(app_config.view.clone())));
    }

    let outcome = sequencer
        .resolve(&app_config.moves)
        .context("resolving moves")?;

    if cli.json {
        let report = ResolutionReport {
            outcome,
            winner: outcome.winner(),
            moves_applied: sequencer.board().move_count(),
            grid: sequencer.board().rows(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
