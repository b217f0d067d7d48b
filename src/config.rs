use crate::common::Tile;

pub const BOARD_SIZE: usize = 4;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles placed when a session starts.
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 with odds `FOUR_ODDS.0` in `FOUR_ODDS.1`, otherwise a 2.
pub const FOUR_ODDS: (u32, u32) = (1, 10);

pub const SMALL_TILE: Tile = 2;
pub const LARGE_TILE: Tile = 4;

/// Largest value accepted by `Board::from_rows`: the highest tile reachable on a 4x4 board.
pub const MAX_TILE: Tile = 1 << 17;
