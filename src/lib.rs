#![cfg_attr(not(feature = "std"), no_std)]

//! twenty48: the 2048 sliding-tile puzzle.
//!
//! The core (`Board`, `GameEngine`, `TileSource`) is pure and `no_std`
//! friendly. With the `std` feature a thin terminal shell drives it.
//!
//! ```
//! use twenty48::{Board, Direction, GameEngine};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut engine = GameEngine::new();
//! engine.start(&mut rng).unwrap();
//! assert_eq!(engine.board().count_empty(), 14);
//!
//! let (board, changed) = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]])
//!     .unwrap()
//!     .shifted(Direction::Right);
//! assert!(changed);
//! assert_eq!(board.rows()[0], [0, 0, 0, 4]);
//! ```

#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod tiles;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod shell;
#[cfg(feature = "std")]
mod shell_cli;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use tiles::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use shell::{parse_command, run_session, Command, Shell};
#[cfg(feature = "std")]
pub use shell_cli::*;
