use std::collections::HashSet;

use sea_battle::{Coordinate, InputError};

#[test]
fn test_structural_equality_and_hashing() {
    let mut set = HashSet::new();
    set.insert(Coordinate::new(1, 2));
    assert!(set.contains(&Coordinate::new(1, 2)));
    assert!(!set.contains(&Coordinate::new(2, 1)));
    assert_eq!(Coordinate::new(3, 4).offset(-1, 2), Coordinate::new(2, 6));
}

#[test]
fn test_neighbors_ring() {
    let ring: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
    assert_eq!(ring.len(), 8);
    assert!(ring.contains(&Coordinate::new(-1, -1)));
    assert!(ring.contains(&Coordinate::new(1, 1)));
    assert!(!ring.contains(&Coordinate::new(0, 0)));
}

#[test]
fn test_parse_one_based() {
    assert_eq!(
        Coordinate::parse_one_based("3 7\n"),
        Ok(Coordinate::new(2, 6))
    );
    assert_eq!(
        Coordinate::parse_one_based("  1\t1 "),
        Ok(Coordinate::new(0, 0))
    );
    // zero decodes below the board and is left for the board to reject
    assert_eq!(
        Coordinate::parse_one_based("0 4"),
        Ok(Coordinate::new(-1, 3))
    );
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(
        Coordinate::parse_one_based(""),
        Err(InputError::WrongTokenCount(0))
    );
    assert_eq!(
        Coordinate::parse_one_based("1 2 3"),
        Err(InputError::WrongTokenCount(3))
    );
    assert_eq!(
        Coordinate::parse_one_based("a 2"),
        Err(InputError::NotANumber("a".to_string()))
    );
    assert_eq!(
        Coordinate::parse_one_based("-1 2"),
        Err(InputError::NotANumber("-1".to_string()))
    );
    assert_eq!(
        Coordinate::parse_one_based("1 +2"),
        Err(InputError::NotANumber("+2".to_string()))
    );
    assert!(matches!(
        Coordinate::parse_one_based("1 99999999999"),
        Err(InputError::NotANumber(_))
    ));
}

#[test]
fn test_display_is_one_based() {
    assert_eq!(Coordinate::new(0, 8).to_string(), "1 9");
}

#[test]
fn test_offset_saturates() {
    let edge = Coordinate::new(i32::MAX, i32::MIN);
    assert_eq!(edge.offset(1, -1), edge);
    assert_eq!(edge.offset(-1, 1), Coordinate::new(i32::MAX - 1, i32::MIN + 1));
    assert_eq!(edge.neighbors().count(), 8);
}
