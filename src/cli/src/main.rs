#![warn(clippy::pedantic)]

mod config;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use config::Config;
use cube3::{Cube, FaceletState, MoveSequence};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use std::path::PathBuf;

/// Scramble, inspect and solve a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube3/config.toml` in the user configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a scramble to a solved cube and search for a solution.
    Solve {
        /// The scramble, e.g. "R_U'F2".
        scramble: String,
        /// Maximum solution length. Defaults to the configured depth.
        #[arg(short, long)]
        depth: Option<u8>,
    },
    /// Generate a random reachable cube and search for a solution.
    Random {
        /// Maximum solution length. Defaults to the configured depth.
        #[arg(short, long)]
        depth: Option<u8>,
    },
    /// Print the stickers and state checks of a solved cube after a scramble.
    Show {
        /// The scramble, e.g. "R_U'F2".
        scramble: String,
    },
    /// Search for a solution to a cube given by its 54 stickers.
    Facelets {
        /// Sticker colors in face order U D F B R L, each face row major.
        stickers: String,
        /// Maximum solution length. Defaults to the configured depth.
        #[arg(short, long)]
        depth: Option<u8>,
    },
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
        Commands::Solve { scramble, depth } => {
            let scramble = scramble.parse::<MoveSequence>()?;
            let mut cube = Cube::new_solved();
            cube.apply_sequence(&scramble)?;
            info!("Applied scramble {scramble}");
            solve(&mut cube, depth.unwrap_or(config.default_depth))
        }
        Commands::Random { depth } => {
            let mut cube = Cube::new_scrambled_random();
            print!("{}", cube.facelet_state());
            solve(&mut cube, depth.unwrap_or(config.default_depth))
        }
        Commands::Show { scramble } => {
            let mut cube = Cube::new_solved();
            cube.apply_str(&scramble)?;
            print!("{}", cube.facelet_state());
            report(&mut cube)
        }
        Commands::Facelets { stickers, depth } => {
            let mut cube = Cube::from_facelets(stickers.parse::<FaceletState>()?);
            cube.cubie_state()?;
            report(&mut cube)?;
            if !cube.is_reachable() {
                return Err(eyre!(
                    "The stickers describe a cube that cannot be reached by turning faces"
                ));
            }
            solve(&mut cube, depth.unwrap_or(config.default_depth))
        }
    }
}

fn report(cube: &mut Cube) -> color_eyre::Result<()> {
    println!("reachable: {}", cube.is_reachable());
    println!("oriented:  {}", cube.is_oriented()?);
    println!("solved:    {}", cube.is_solved());
    Ok(())
}

fn solve(cube: &mut Cube, depth: u8) -> color_eyre::Result<()> {
    match cube.solve(depth)? {
        Some(solution) if solution.is_empty() => println!("Already solved"),
        Some(solution) => println!("{solution}"),
        None => println!("No solution within {depth} moves"),
    }
    Ok(())
}
