//! Headless game runner (default binary).
//!
//! Plays one game with the lookahead planner, printing the grid after every
//! placement, until no piece fits.

use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use tetris_lookahead::core::{GameState, UniformPieces};
use tetris_lookahead::engine::{Planner, SearchConfig};
use tetris_lookahead::term::{ConsoleRenderer, GameView};
use tetris_lookahead::types::QUEUE_LEN;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level (-v = WARN, -vv = INFO, -vvv = DEBUG, -vvvv = TRACE)")]
    verbose: u8,

    #[arg(long, help = "Seed for the piece sequence (random when omitted)")]
    seed: Option<u64>,

    #[arg(
        long,
        env = "TETRIS_SEARCH_BUDGET_MS",
        default_value_t = 10_000,
        help = "Thinking time per move in milliseconds"
    )]
    budget_ms: u64,

    #[arg(long, default_value_t = QUEUE_LEN, help = "Deepest lookahead ply (at most the queue length)")]
    max_plies: usize,

    #[arg(long, help = "Stop after this many placements even if the game is not over")]
    max_turns: Option<u32>,

    #[arg(long, help = "Allow the search to fill the rightmost column")]
    no_right_well: bool,

    #[arg(long, help = "Always search, even when the bar can clear four rows")]
    no_shortcut: bool,

    #[arg(short, long, help = "Only print the final summary")]
    quiet: bool,

    #[arg(long, help = "Print score and upcoming pieces under each grid")]
    status: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_budget(Duration::from_millis(self.budget_ms))
            .with_max_plies(self.max_plies)
            .with_keep_right_column_free(!self.no_right_well)
            .with_tetris_shortcut(!self.no_shortcut)
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    // Errors are always shown; each -v adds one level.
    let verbosity = verbose.saturating_add(1).clamp(1, 5);
    let level = Level::from_str(verbosity.to_string().as_str())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = cli.search_config();
    info!(seed, budget = ?config.budget, plies = config.ply_limit(), "starting game");

    // The search gets its own stream so thinking never shifts the real sequence.
    let mut pieces = UniformPieces::seeded(seed);
    let mut lookahead = UniformPieces::seeded(seed.wrapping_add(1));
    let planner = Planner::new(config);
    let mut renderer = ConsoleRenderer::stdout(GameView::new(cli.status));

    let started = Instant::now();
    let mut state = GameState::new(&mut pieces);
    if !cli.quiet {
        renderer.draw(&state)?;
    }

    while !state.is_done() {
        if cli.max_turns.is_some_and(|max| state.pieces() >= max) {
            info!(pieces = state.pieces(), "turn limit reached");
            break;
        }

        let report = planner.search(&state, &mut lookahead)?;
        info!(
            piece = %state.front_piece(),
            action = %report.action,
            plies = report.plies,
            nodes = report.nodes,
            stop = ?report.stop,
            "move chosen"
        );
        state = state.step(report.action, &mut pieces);

        if !cli.quiet {
            renderer.draw(&state)?;
        }
    }

    if state.is_done() {
        renderer.line("Game over!")?;
    }
    renderer.line(&format!(
        "score: {} lines: {} pieces: {} seed: {} elapsed: {:.1?}",
        state.score(),
        state.lines(),
        state.pieces(),
        seed,
        started.elapsed()
    ))?;

    Ok(())
}
