//! Capture Chain - build a chain of captures that ends on the enemy king.
//!
//! Every subcommand works on one round: a generated 5x5 board with missing
//! squares, a starting corner, the enemy king, and four pieces. Output goes
//! to stdout; logs go to stderr.

mod config;
mod render;
mod saves;

use anyhow::{bail, Context};
use chain_core::{format_chain, parse_position, BoardPosition, PieceType, Placement, CATALOG};
use chain_engine::movegen::moves_from;
use chain_engine::{
    count_solutions, generate_board, solve, BoardSave, Difficulty, LevelBook, Round, Session,
};
use clap::{Args, Parser, Subcommand};
use config::ChainConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "capture-chain")]
#[command(about = "Capture-chain chess puzzle")]
struct Cli {
    /// Config file to use instead of ./chain.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that deals a round.
#[derive(Args)]
struct RoundArgs {
    /// easy, medium, or hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
    /// Level id to deal pieces from
    #[arg(short, long)]
    level: Option<String>,
    /// Seed for a reproducible round
    #[arg(short, long)]
    seed: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and draw a board
    Board {
        #[command(flatten)]
        round: RoundArgs,
        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the pieces dealt for a round
    Pieces {
        #[command(flatten)]
        round: RoundArgs,
        /// List the whole catalog instead
        #[arg(long)]
        all: bool,
    },
    /// Show where a piece type moves from a square
    Moves {
        /// rook, bishop, knight, queen, or king
        piece: PieceType,
        /// Square as x,y
        #[arg(value_parser = parse_position)]
        from: BoardPosition,
    },
    /// List available levels
    Levels,
    /// Play a round from a list of placements
    Play {
        #[command(flatten)]
        round: RoundArgs,
        /// Placements in order, e.g. rook-blue@0,0
        placements: Vec<Placement>,
        /// Save the result under this name
        #[arg(long)]
        save: Option<String>,
    },
    /// Load and check a saved round
    Replay {
        /// Path to a save file
        file: PathBuf,
    },
    /// Find the best-scoring chain for a round
    Solve {
        #[command(flatten)]
        round: RoundArgs,
        /// Also count every chain that reaches the king
        #[arg(long)]
        count: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) if !path.exists() => bail!("config file {} not found", path.display()),
        Some(path) => ChainConfig::load_from(path)?,
        None => ChainConfig::load()?,
    };
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.tracing_level()?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let levels = config.level_book()?;

    match cli.command {
        Commands::Board { round, json } => {
            let difficulty = round.difficulty.unwrap_or(config.difficulty);
            let board = generate_board(difficulty, round.seed.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                print!("{}", render::render_board(&board));
                println!("difficulty: {}", difficulty);
                println!("seed: {}", board.seed.as_deref().unwrap_or("-"));
            }
        }
        Commands::Pieces { round, all } => {
            if all {
                print!("{}", render::render_pieces(CATALOG.iter()));
            } else {
                let round = deal(&round, &config, &levels);
                print!("{}", render::render_pieces(round.pieces()));
            }
        }
        Commands::Moves { piece, from } => {
            let moves = moves_from(piece, from);
            print!("{}", render::render_moves(piece, from, moves));
            println!("{} targets: {}", moves.count(), format_chain(&moves.to_vec()));
        }
        Commands::Levels => {
            for level in levels.all() {
                println!("{:<18} {:<18} {}", level.id, level.name, level.pieces.join(", "));
            }
        }
        Commands::Play {
            round,
            placements,
            save,
        } => {
            let mut current = deal(&round, &config, &levels);
            for placement in &placements {
                current = current
                    .place(placement.piece.id, placement.position)
                    .with_context(|| format!("cannot play {}", placement))?;
            }
            print!("{}", render::render_round(&current));
            print_seed(&current);

            let points = if current.is_complete() {
                let outcome = Session::new().complete(&current)?;
                println!("king captured");
                print!("{}", render::render_score(&outcome.score));
                outcome.score.points
            } else {
                let score = current.potential_score();
                if let Err(reason) = current.check() {
                    println!("not complete: {}", reason);
                }
                if !current.chain().is_empty() {
                    print!("{}", render::render_score(&score));
                }
                let targets = current.drop_targets();
                println!("next squares: {}", format_chain(&targets.to_vec()));
                score.points
            };

            if let Some(name) = save {
                let timestamp = chrono::Utc::now().timestamp_millis();
                let record = BoardSave::capture(&current, points, name, timestamp);
                let path = saves::write_save(&config.save_dir, &record)?;
                println!("saved to {}", path.display());
            }
        }
        Commands::Replay { file } => {
            let record = saves::read_save(&file)
                .with_context(|| format!("cannot read save {}", file.display()))?;
            let round = record.restore()?;
            let score = round.potential_score();

            println!("{}", record.name);
            print!("{}", render::render_round(&round));
            print_seed(&round);
            print!("{}", render::render_score(&score));
            println!("complete: {}", round.is_complete());
            if score.points != record.score {
                tracing::warn!(
                    saved = record.score,
                    replayed = score.points,
                    "saved score differs from replayed score"
                );
            }
        }
        Commands::Solve { round, count } => {
            let round = deal(&round, &config, &levels);
            print!("{}", render::render_board(round.board()));
            print_seed(&round);
            match solve(&round) {
                Some(solution) => {
                    let moves: Vec<String> = solution
                        .placements
                        .iter()
                        .map(|(id, pos)| format!("{}@{}", id, pos))
                        .collect();
                    println!("best: {}", moves.join(" "));
                    print!("{}", render::render_score(&solution.score));
                }
                None => println!("no chain reaches the king"),
            }
            if count {
                println!("solutions: {}", count_solutions(&round));
            }
        }
    }

    Ok(())
}

fn deal(args: &RoundArgs, config: &ChainConfig, levels: &LevelBook) -> Round {
    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let level = args.level.as_deref().or(config.level.as_deref());
    Round::generate(difficulty, levels, level, args.seed.as_deref())
}

fn print_seed(round: &Round) {
    if let Some(seed) = &round.board().seed {
        println!("seed: {}", seed);
    }
}
