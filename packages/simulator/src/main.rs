//! Lizard simulator CLI - plays bot-only games in memory.
//!
//! Results are written as one JSON object per game, to a file or to stdout.

mod metrics;
mod output;
mod simulator;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use lizard::BotKind;
use metrics::{build_game_metrics, summarize, GameMetrics};
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lizard-sim")]
#[command(about = "In-memory Lizard game simulator for bot evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of seats when --seats is not given (3 to 5)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Rounds per game; defaults to as many as the deck covers
    #[arg(short, long)]
    rounds: Option<u8>,

    /// Bot kind for every seat
    #[arg(long, default_value = "random", conflicts_with = "seats")]
    bot: BotKind,

    /// Comma separated bot kind per seat, e.g. `random,mock,random`
    #[arg(long, value_delimiter = ',')]
    seats: Option<Vec<BotKind>>,

    /// Base seed; game N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Deal from an unshuffled deck
    #[arg(long)]
    ordered: bool,

    /// JSON-lines output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show progress and a summary
    #[arg(long)]
    show_output: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let bots = args
        .seats
        .clone()
        .unwrap_or_else(|| vec![args.bot; args.players]);
    let bot_names: Vec<String> = bots.iter().map(|b| b.to_string()).collect();
    info!(games = args.games, seats = ?bot_names, rounds = ?args.rounds, "Starting simulator");

    let simulator = Simulator::new(bots, args.rounds, args.ordered);
    let mut output_writer = OutputWriter::new(args.output.as_deref())?;
    if let Some(path) = output_writer.output_path() {
        info!("Writing results to {}", path.display());
    }

    let start = Instant::now();
    let mut completed: Vec<GameMetrics> = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num - 1)),
            None => rand::random(),
        };

        match simulator.simulate_game(game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    bot_names.clone(),
                    args.ordered,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game = game_num, error = %e, "Failed to write metrics");
                }
                info!(game = game_num, seed = game_seed, scores = ?result.final_scores, "Game completed");
                completed.push(metrics);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, seed = game_seed, error = %e, "Game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    output_writer.finish()?;

    if args.show_output {
        print_summary(&completed, simulator.players(), errors, elapsed, args.games);
    }

    if errors == args.games && args.games > 0 {
        return Err(format!("all {errors} games failed").into());
    }
    Ok(())
}

fn print_summary(games: &[GameMetrics], players: usize, errors: u32, elapsed: Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Games completed: {}/{}", games.len(), total);
    if errors > 0 {
        eprintln!("Errors: {errors}");
    }
    eprintln!("Total time: {elapsed:?}");
    if games.is_empty() {
        return;
    }
    eprintln!("Average time per game: {:?}", elapsed / games.len() as u32);

    eprintln!("\n=== Results by Seat ===");
    let bots = &games[0].config.bots;
    for (seat, summary) in summarize(games, players).iter().enumerate() {
        eprintln!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%), exact estimates={:.1}%",
            seat,
            bots.get(seat).map(String::as_str).unwrap_or("?"),
            summary.avg_score(),
            summary.min_score,
            summary.max_score,
            summary.wins,
            summary.win_rate(),
            summary.exact_rate(),
        );
    }
}
