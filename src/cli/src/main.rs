#![warn(clippy::pedantic)]

mod config;
mod render;

use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Context, eyre};
use cube_core::{CubeState, Move, MoveSequence, Session, parse_sequence, scramble, scramble_with};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;

use crate::config::Config;

/// Turn a virtual 3x3x3 cube from the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube/config.toml` in the user's config directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random scramble and the cube it produces.
    Scramble {
        /// Number of moves; overrides the config.
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence, e.g. "R U R' U'".
    Apply {
        /// The moves to apply.
        sequence: String,
        /// Start from this state (54 facelet letters) instead of solved.
        #[arg(long)]
        from: Option<String>,
    },
    /// Play interactively, one line of moves at a time.
    Play,
    /// Print the effective configuration.
    Config,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Scramble { length, seed } => {
            let length = length.unwrap_or(config.scramble_length);
            let (state, moves) = match seed {
                Some(seed) => scramble_with(&mut fastrand::Rng::with_seed(seed), length),
                None => scramble(length),
            };
            println!("{}", MoveSequence(&moves));
            print_state(&state, &config);
        }
        Commands::Apply { sequence, from } => {
            let start = match from {
                Some(facelets) => facelets
                    .parse::<CubeState>()
                    .wrap_err("Invalid starting state")?,
                None => CubeState::solved(),
            };
            let moves = parse_sequence(&sequence).wrap_err("Invalid move sequence")?;
            let state = start.apply_moves(&moves);
            print_state(&state, &config);
        }
        Commands::Play => play(&config)?,
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn print_state(state: &CubeState, config: &Config) {
    print!("{}", render::net(state, config.unicode_stickers));
    println!("{state}");
    if state.is_solved() {
        println!("{}", "Solved".green().bold());
    }
}

const PLAY_HELP: &str = "\
Enter moves like `R U R' U'`, or one of:
  keys <letters>  lowercase letters turn clockwise, uppercase counter-clockwise
  shuffle         scramble the cube
  reset           go back to a solved cube
  history         show every move since the last reset
  help            show this message
  quit            leave";

fn play(config: &Config) -> color_eyre::Result<()> {
    let mut session = Session::new();
    eprintln!("{PLAY_HELP}");
    print_state(session.state(), config);

    for line in io::stdin().lines() {
        let line = line?;
        let line = line.trim();

        match line.split_once(' ').map_or((line, ""), |(a, b)| (a, b.trim())) {
            ("", _) => continue,
            ("quit" | "exit", _) => break,
            ("help", _) => {
                eprintln!("{PLAY_HELP}");
                continue;
            }
            ("history", _) => {
                println!("{}", MoveSequence(session.history()));
                continue;
            }
            ("reset", _) => session.reset(),
            ("shuffle", _) => {
                let moves = session.shuffle(config.scramble_length);
                info!("Shuffled with {}", MoveSequence(moves));
            }
            ("keys", keys) => match keys_to_moves(keys) {
                Ok(moves) => {
                    for move_ in moves {
                        session.perform(move_);
                    }
                }
                Err(e) => {
                    warn!("Ignoring keys `{keys}`: {e}");
                    continue;
                }
            },
            _ => {
                if let Err(e) = session.perform_token(line) {
                    eprintln!("{}", e.red());
                    continue;
                }
            }
        }

        print_state(session.state(), config);
        if session.is_solved() && session.move_count() > 0 {
            println!("Solved in {} moves!", session.move_count());
        }
    }

    Ok(())
}

fn keys_to_moves(keys: &str) -> color_eyre::Result<Vec<Move>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|key| Move::from_key(key).ok_or_else(|| eyre!("`{key}` is not a move key")))
        .collect()
}
