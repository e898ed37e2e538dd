use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Coordinate, FleetError, FleetGenerator, ShotResult, BOARD_SIZE, FLEET, NUM_SHIPS,
    PLACEMENT_ATTEMPT_BUDGET, TOTAL_SHIP_CELLS,
};

fn assert_no_touching(board: &sea_battle::Board) {
    let ships = board.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in ships.iter().skip(i + 1) {
            for ca in a.occupied_cells() {
                for cb in b.occupied_cells() {
                    let dr = (ca.row() - cb.row()).abs();
                    let dc = (ca.col() - cb.col()).abs();
                    assert!(dr > 1 || dc > 1, "{:?} touches {:?}", a, b);
                }
            }
        }
    }
}

#[test]
fn test_standard_fleet_is_complete() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = FleetGenerator::default().generate(&mut rng);

    assert_eq!(board.dimension(), BOARD_SIZE);
    assert_eq!(board.ships().len(), NUM_SHIPS);
    let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, FLEET.to_vec());

    let cells: usize = board.ships().iter().map(|s| s.length()).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    for ship in board.ships() {
        for cell in ship.occupied_cells() {
            assert!(!board.is_out_of_bounds(cell));
        }
    }
    assert_no_touching(&board);
}

#[test]
fn test_generated_board_is_ready_for_shots() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = FleetGenerator::default().generate(&mut rng);
    assert!(!board.is_defeated());
    assert_eq!(board.destroyed_count(), 0);

    let target = board.ships()[0].origin();
    assert!(!board.was_targeted(target));
    let result = board.resolve_shot(target).unwrap();
    assert_eq!(result, ShotResult::Hit);
}

#[test]
fn test_same_seed_same_fleet() {
    let generator = FleetGenerator::default();
    let a = generator.generate(&mut SmallRng::seed_from_u64(2024));
    let b = generator.generate(&mut SmallRng::seed_from_u64(2024));
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn test_budget_exhaustion_is_reported() {
    // ten 3-cell ships with margins cannot fit on a 3x3 board
    let generator = FleetGenerator::new(3, &[3; 10]).with_attempt_budget(50);
    let mut rng = SmallRng::seed_from_u64(1);
    match generator.try_build(&mut rng) {
        Err(FleetError::BudgetExhausted { placed, requested }) => {
            assert!(placed < requested);
            assert_eq!(requested, 10);
        }
        Ok(board) => panic!("impossible fleet placed: {:?}", board.ships()),
    }
}

#[test]
fn test_custom_lengths_and_budget() {
    let generator = FleetGenerator::new(5, &[2, 1]);
    assert_eq!(generator.lengths(), &[2, 1]);
    assert_eq!(generator.dimension(), 5);

    let mut rng = SmallRng::seed_from_u64(3);
    let board = generator.generate(&mut rng);
    assert_eq!(board.ships().len(), 2);
    assert_no_touching(&board);

    assert_eq!(
        FleetGenerator::default(),
        FleetGenerator::standard(BOARD_SIZE).with_attempt_budget(PLACEMENT_ATTEMPT_BUDGET)
    );
}

#[test]
fn test_larger_board() {
    let mut rng = SmallRng::seed_from_u64(99);
    let board = FleetGenerator::standard(15).generate(&mut rng);
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert!(board
        .ships()
        .iter()
        .flat_map(|s| s.occupied_cells().collect::<Vec<Coordinate>>())
        .all(|c| !board.is_out_of_bounds(c)));
}
