//! Random sources for tile spawning.
//!
//! The engine never reaches for a global RNG. Every spawn draws from a
//! [`TileSource`] passed in by the caller, so tests can script exact outcomes.

use crate::common::{BoardError, Tile};
use crate::config::{FOUR_ODDS, LARGE_TILE, SMALL_TILE};
use rand::Rng;

/// Supplies the two random choices a spawn needs.
///
/// Each spawn calls `pick_cell` first, then `pick_value`.
pub trait TileSource {
    /// Choose an index in `0..empty` among the empty cells, in row-major order.
    /// `empty` is always at least 1.
    fn pick_cell(&mut self, empty: usize) -> usize;

    /// Choose the value of the new tile (2 or 4).
    fn pick_value(&mut self) -> Tile;
}

impl<R: Rng + ?Sized> TileSource for R {
    fn pick_cell(&mut self, empty: usize) -> usize {
        self.random_range(0..empty)
    }

    fn pick_value(&mut self) -> Tile {
        if self.random_ratio(FOUR_ODDS.0, FOUR_ODDS.1) {
            LARGE_TILE
        } else {
            SMALL_TILE
        }
    }
}

/// Deterministic source replaying a fixed list of `(cell_index, value)` picks.
///
/// Cell indices wrap modulo the number of empty cells. Once the script runs
/// out, every spawn lands on the first empty cell with a 2.
#[derive(Debug, Clone)]
pub struct ScriptedTiles<'a> {
    picks: &'a [(usize, Tile)],
    next: usize,
}

impl<'a> ScriptedTiles<'a> {
    /// Fails with [`BoardError::InvalidSpawn`] if any scripted value is not 2 or 4.
    pub fn new(picks: &'a [(usize, Tile)]) -> Result<Self, BoardError> {
        if let Some(&(_, value)) = picks
            .iter()
            .find(|(_, v)| *v != SMALL_TILE && *v != LARGE_TILE)
        {
            return Err(BoardError::InvalidSpawn { value });
        }
        Ok(Self { picks, next: 0 })
    }

    /// Number of scripted picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len().saturating_sub(self.next)
    }

    fn current(&self) -> Option<(usize, Tile)> {
        self.picks.get(self.next).copied()
    }
}

impl TileSource for ScriptedTiles<'_> {
    fn pick_cell(&mut self, empty: usize) -> usize {
        self.current().map_or(0, |(cell, _)| cell % empty)
    }

    fn pick_value(&mut self) -> Tile {
        let value = self.current().map_or(SMALL_TILE, |(_, value)| value);
        if self.next < self.picks.len() {
            self.next += 1;
        }
        value
    }
}
