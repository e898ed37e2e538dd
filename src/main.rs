#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    greeting, init_logging, render_outcome, AiPlayer, CliPlayer, FleetGenerator, GameLoop,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = MIN_BOARD_SIZE, value_parser = parse_size)]
        size: usize,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = MIN_BOARD_SIZE, value_parser = parse_size)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {} and {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE
        ))
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            init_logging(LevelFilter::Warn);
            println!("{}", greeting());
            let mut rng = make_rng(seed);
            let generator = FleetGenerator::standard(size);
            let human_board = generator.generate(&mut rng);
            let mut computer_board = generator.generate(&mut rng);
            computer_board.set_reveal_ships(false);

            let computer = AiPlayer::new(SmallRng::seed_from_u64(rng.random()));
            let mut game = GameLoop::new(
                Box::new(CliPlayer::stdio()),
                human_board,
                Box::new(computer),
                computer_board,
            );
            game.run()?;
            println!("{}", render_outcome(&game, "Player", "Computer"));
        }
        Commands::Watch { seed, size } => {
            // every shot is logged at debug level
            init_logging(LevelFilter::Debug);
            println!("Starting computer vs computer game...");
            let mut rng = make_rng(seed);
            let generator = FleetGenerator::standard(size);
            let board_a = generator.generate(&mut rng);
            let board_b = generator.generate(&mut rng);

            let mut game = GameLoop::new(
                Box::new(AiPlayer::new(SmallRng::seed_from_u64(rng.random()))),
                board_a,
                Box::new(AiPlayer::new(SmallRng::seed_from_u64(rng.random()))),
                board_b,
            );
            game.run()?;
            println!("{}", render_outcome(&game, "First computer", "Second computer"));
        }
    }
    Ok(())
}
