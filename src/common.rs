//! Common types for 2048: tiles, move directions and engine errors.

use crate::config::BOARD_SIZE;

/// Value held by a cell. `0` marks an empty cell, anything else is a power of two.
pub type Tile = u32;

/// One line of the board, read left to right.
pub type Row = [Tile; BOARD_SIZE];

/// Direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is out of bounds [0..BOARD_SIZE).
    OutOfBounds { row: usize, col: usize },
    /// Cell value is neither zero nor a power of two within range.
    InvalidTile { row: usize, col: usize, value: Tile },
    /// A spawn value other than 2 or 4.
    InvalidSpawn { value: Tile },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidTile { row, col, value } => {
                write!(f, "Invalid tile {} at row={}, col={}", value, row, col)
            }
            BoardError::InvalidSpawn { value } => {
                write!(f, "Invalid spawn value {}: expected 2 or 4", value)
            }
        }
    }
}

/// Errors returned by the session engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `start` was called on a session that already holds its opening tiles.
    AlreadyStarted,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::AlreadyStarted => write!(f, "Session has already been started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
