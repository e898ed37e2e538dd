use sea_battle::{Coordinate, Orientation, Ship};

#[test]
fn test_occupied_cells_follow_orientation() {
    let horizontal = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = horizontal.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3)
        ]
    );

    let vertical = Ship::new(Coordinate::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = vertical.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
            Coordinate::new(3, 0)
        ]
    );
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coordinate::new(5, 5), 2, Orientation::Vertical);
    assert!(ship.is_hit_by(Coordinate::new(5, 5)));
    assert!(ship.is_hit_by(Coordinate::new(6, 5)));
    assert!(!ship.is_hit_by(Coordinate::new(7, 5)));
    assert!(!ship.is_hit_by(Coordinate::new(5, 6)));
}

#[test]
fn test_new_ship_is_undamaged() {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.remaining_hits(), 3);
    assert!(!ship.is_sunk());
    assert_eq!(ship.origin(), Coordinate::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_cells_may_leave_the_board() {
    // bounds are the board's business
    let ship = Ship::new(Coordinate::new(8, 8), 3, Orientation::Horizontal);
    let last = ship.occupied_cells().last().unwrap();
    assert_eq!(last, Coordinate::new(8, 10));
}

#[test]
#[should_panic]
fn test_zero_length_ship_panics() {
    let _ = Ship::new(Coordinate::new(0, 0), 0, Orientation::Vertical);
}

#[test]
#[should_panic]
fn test_length_beyond_i32_panics() {
    let _ = Ship::new(Coordinate::new(0, 0), i32::MAX as usize + 1, Orientation::Horizontal);
}
