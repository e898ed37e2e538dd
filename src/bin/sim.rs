use log::LevelFilter;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{init_logging, AiPlayer, FleetGenerator, GameLoop, GameState, Side};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    shots: usize,
    ships_destroyed: usize,
}

#[derive(Serialize)]
struct SimReport {
    state: GameState,
    winner: Option<Side>,
    player_a: SideReport,
    player_b: SideReport,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed_a> <seed_b>", args[0]);
        std::process::exit(1);
    }
    let seed_a: u64 = args[1].parse()?;
    let seed_b: u64 = args[2].parse()?;

    let mut rng_a = SmallRng::seed_from_u64(seed_a);
    let mut rng_b = SmallRng::seed_from_u64(seed_b);

    let generator = FleetGenerator::default();
    let board_a = generator.generate(&mut rng_a);
    let board_b = generator.generate(&mut rng_b);

    let mut game = GameLoop::new(
        Box::new(AiPlayer::new(SmallRng::seed_from_u64(rng_a.random()))),
        board_a,
        Box::new(AiPlayer::new(SmallRng::seed_from_u64(rng_b.random()))),
        board_b,
    );
    let state = game.run()?;

    let report = SimReport {
        state,
        winner: state.winner(),
        player_a: SideReport {
            shots: game.shots_fired(Side::PlayerA),
            ships_destroyed: game.board(Side::PlayerB).destroyed_count(),
        },
        player_b: SideReport {
            shots: game.shots_fired(Side::PlayerB),
            ships_destroyed: game.board(Side::PlayerA).destroyed_count(),
        },
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
