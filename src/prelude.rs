//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Direction, GameEngine, GameState, GameStatus, MoveOutcome, TileSource};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_session, CliShell, Command, Shell};
