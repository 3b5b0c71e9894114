use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use funnections::core::{ActionOutcome, GameConfig, GameRng, Puzzle};
use funnections::puzzles;
use funnections::rules::GameEngine;
use funnections::session::Session;
use funnections::view::{ActionRequest, ViewModel};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "funnections", version, about = "Find four groups of four, one guess at a time")]
struct Cli {
    /// Puzzle file (JSON); the built-in sample is used when absent
    #[arg(long, env = "FUNNECTIONS_PUZZLE")]
    puzzle: Option<PathBuf>,
    /// Date label shown in the header; defaults to the puzzle's own, then today
    #[arg(long)]
    date: Option<String>,
    /// Incorrect guesses allowed before the game is lost
    #[arg(
        long,
        env = "FUNNECTIONS_MISTAKES",
        default_value_t = GameConfig::DEFAULT_MISTAKES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    mistakes: u32,
    /// Seed for the deal and shuffles
    #[arg(long)]
    seed: Option<u64>,
    /// Print the view model as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new().with_mistake_budget(cli.mistakes);
    let puzzle = match &cli.puzzle {
        Some(path) => Puzzle::load(&config, path)?,
        None => puzzles::sample(&config)?,
    };
    let date = cli.date.unwrap_or_else(|| puzzle.date_or_today());
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    let session = Session::start(GameEngine::new(config), &puzzle, date, rng);
    let mut out = io::stdout().lock();
    emit(&mut out, &session.view(), cli.json)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        let action = match ActionRequest::parse_line(&line) {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "ignoring command");
                eprintln!(
                    "{err} (try: select-tile <id>, submit, shuffle, deselect-all, view, quit)"
                );
                continue;
            }
        };

        let response = session.handle(action);
        emit(&mut out, &response.view, cli.json)?;

        if let ActionOutcome::Correct { won: true, .. }
        | ActionOutcome::Incorrect { lost: true, .. } = response.outcome
        {
            let result = session.engine().result(&session.snapshot());
            info!(?result, "game finished");
        }
    }

    Ok(())
}

fn emit(out: &mut impl Write, view: &ViewModel, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, view)?;
        writeln!(out)
    } else {
        writeln!(out, "{view}\n")
    }
}
