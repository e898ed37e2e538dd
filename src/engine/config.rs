/// Side length of the standard square board.
pub const BOARD_SIZE: usize = 9;

pub const NUM_SHIPS: usize = 9;

/// Ship lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole board before the generator
/// throws it away and starts over.
pub const PLACEMENT_ATTEMPT_BUDGET: usize = 2000;

/// Smallest and largest board sides accepted from the command line.
pub const MIN_BOARD_SIZE: usize = BOARD_SIZE;
pub const MAX_BOARD_SIZE: usize = 20;
