//! Board state and the row primitives every move is built from.
//!
//! Only sliding left is implemented directly. Right is left on reversed rows,
//! up and down are left and right on the transposed grid, so merge semantics
//! live in exactly one place: [`slide_row`].

use crate::common::{BoardError, Direction, Row, Tile};
use crate::config::{BOARD_SIZE, MAX_TILE, NUM_CELLS};
use crate::tiles::TileSource;
use core::fmt;

/// Remove empty cells from `row`, keeping order, and pad the end with zeros.
pub fn compress_row(row: Row) -> Row {
    let mut out = [0; BOARD_SIZE];
    let mut len = 0;
    for value in row.into_iter().filter(|&v| v != 0) {
        out[len] = value;
        len += 1;
    }
    out
}

/// Single left-to-right merge pass.
///
/// Each pair `(i, i + 1)` is consulted once, in index order. When both hold the
/// same nonzero value, `i` doubles and `i + 1` is cleared, which makes the
/// cleared cell ineligible for the next comparison. Nothing cascades within a
/// pass: `[2, 2, 2, 2]` becomes `[4, 0, 4, 0]`, never `[8, 0, 0, 0]`.
///
/// A pair whose sum would not fit in a [`Tile`] is left unmerged.
pub fn merge_row(mut row: Row) -> Row {
    for i in 0..BOARD_SIZE - 1 {
        if row[i] != 0 && row[i] == row[i + 1] {
            if let Some(doubled) = row[i].checked_mul(2) {
                row[i] = doubled;
                row[i + 1] = 0;
            }
        }
    }
    row
}

/// Slide one row to the left: compress, merge, compress again.
pub fn slide_row(row: Row) -> Row {
    compress_row(merge_row(compress_row(row)))
}

/// A tile placed by [`Board::spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// The 4x4 grid. Every cell is `0` (empty) or a power of two.
///
/// Serialized as its bare rows; deserializing goes through [`Board::from_rows`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[Row; BOARD_SIZE]", into = "[Row; BOARD_SIZE]")
)]
pub struct Board {
    cells: [Row; BOARD_SIZE],
}

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board {
        cells: [[0; BOARD_SIZE]; BOARD_SIZE],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from explicit rows, checking every cell holds a legal tile.
    pub fn from_rows(rows: [Row; BOARD_SIZE]) -> Result<Self, BoardError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Board { cells: rows })
    }

    /// Read-only view of the grid, row-major.
    pub fn rows(&self) -> &[Row; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Tile, BoardError> {
        self.cells
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &v)| v == 0)
                .map(move |(c, _)| (r, c))
        })
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board, `0` when empty.
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Swap rows and columns.
    pub fn transpose(self) -> Board {
        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, line) in self.cells.iter().enumerate() {
            for (c, &value) in line.iter().enumerate() {
                cells[c][r] = value;
            }
        }
        Board { cells }
    }

    fn reverse_rows(self) -> Board {
        let mut cells = self.cells;
        for line in cells.iter_mut() {
            line.reverse();
        }
        Board { cells }
    }

    /// Slide every row left. Returns `true` if any cell changed.
    pub fn move_left(&mut self) -> bool {
        let before = self.cells;
        for line in self.cells.iter_mut() {
            *line = slide_row(*line);
        }
        self.cells != before
    }

    pub fn move_right(&mut self) -> bool {
        *self = self.reverse_rows();
        let changed = self.move_left();
        *self = self.reverse_rows();
        changed
    }

    pub fn move_up(&mut self) -> bool {
        *self = self.transpose();
        let changed = self.move_left();
        *self = self.transpose();
        changed
    }

    pub fn move_down(&mut self) -> bool {
        *self = self.transpose();
        let changed = self.move_right();
        *self = self.transpose();
        changed
    }

    /// Slide in `dir`, returning whether the grid changed. No tile is spawned.
    pub fn shift(&mut self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    /// Like [`Board::shift`] but consumes the board and returns the result.
    pub fn shifted(mut self, dir: Direction) -> (Board, bool) {
        let changed = self.shift(dir);
        (self, changed)
    }

    /// `true` when every cell is filled and no two orthogonal neighbours match.
    pub fn is_terminal(&self) -> bool {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let value = self.cells[r][c];
                if value == 0 {
                    return false;
                }
                if c + 1 < BOARD_SIZE && value == self.cells[r][c + 1] {
                    return false;
                }
                if r + 1 < BOARD_SIZE && value == self.cells[r + 1][c] {
                    return false;
                }
            }
        }
        true
    }

    /// Place a 2 or 4 on a random empty cell drawn from `src`.
    ///
    /// Does nothing and returns `None` when the board is full.
    pub fn spawn_tile<S: TileSource + ?Sized>(&mut self, src: &mut S) -> Option<Spawn> {
        let mut empty = [(0usize, 0usize); NUM_CELLS];
        let mut count = 0;
        for cell in self.empty_cells() {
            empty[count] = cell;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let pick = src.pick_cell(count);
        debug_assert!(pick < count, "tile source picked cell {} of {}", pick, count);
        let (row, col) = empty[pick % count];
        let value = src.pick_value();
        debug_assert!(is_valid_tile(value) && value != 0);
        self.cells[row][col] = value;
        log::trace!("spawned {} at ({}, {})", value, row, col);
        Some(Spawn { row, col, value })
    }
}

fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

impl TryFrom<[Row; BOARD_SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [Row; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for [Row; BOARD_SIZE] {
    fn from(b: Board) -> Self {
        b.cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, line) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "-------+-------+-------+-------")?;
            }
            for (c, &value) in line.iter().enumerate() {
                if c > 0 {
                    f.write_str("|")?;
                }
                if value == 0 {
                    f.write_str("       ")?;
                } else {
                    write!(f, "{:^7}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
