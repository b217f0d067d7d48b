use crate::{
    board::{Board, Spawn},
    common::{Direction, GameError},
    config::START_TILES,
    tiles::TileSource,
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Moves are accepted and tiles spawn.
    Active,
    /// No empty cells and no adjacent pairs left; input is ignored.
    Terminal,
}

/// Snapshot handed to the presentation shell after every processed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub status: GameStatus,
    pub moves: u32,
}

/// What a single directional input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Session not started or already terminal.
    Ignored,
    /// No tile could move or merge; nothing spawned.
    Unchanged,
    /// The grid changed and a new tile was placed.
    Moved { spawn: Option<Spawn> },
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Core session logic owning the board.
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    started: bool,
    moves: u32,
}

impl GameEngine {
    /// Create a session with an empty board. Call [`GameEngine::start`] to seed it.
    pub fn new() -> Self {
        Self {
            board: Board::EMPTY,
            status: GameStatus::Active,
            started: false,
            moves: 0,
        }
    }

    /// Seed the opening tiles.
    pub fn start<S: TileSource + ?Sized>(&mut self, src: &mut S) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        for _ in 0..START_TILES {
            self.board.spawn_tile(src);
        }
        self.started = true;
        log::info!("session started, {} tiles placed", START_TILES);
        Ok(())
    }

    /// Apply one directional input: slide, then spawn and check for the end
    /// of the session only if the grid changed.
    pub fn play<S: TileSource + ?Sized>(&mut self, dir: Direction, src: &mut S) -> MoveOutcome {
        if !self.started || self.status == GameStatus::Terminal {
            log::debug!("ignoring {} (status {:?})", dir, self.status);
            return MoveOutcome::Ignored;
        }
        if !self.board.shift(dir) {
            log::debug!("{} left the board unchanged", dir);
            return MoveOutcome::Unchanged;
        }
        self.moves += 1;
        let spawn = self.board.spawn_tile(src);
        log::debug!("move #{} {}: spawned {:?}", self.moves, dir, spawn);
        if self.board.is_terminal() {
            self.status = GameStatus::Terminal;
            log::info!(
                "no moves left after {} moves, highest tile {}",
                self.moves,
                self.board.highest_tile()
            );
        }
        MoveOutcome::Moved { spawn }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of moves that changed the grid.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            status: self.status,
            moves: self.moves,
        }
    }

    /// Resume a session from a snapshot. The status is recomputed from the board.
    ///
    /// An empty board means the session was never started: tiles only ever
    /// merge, so a started board always holds at least one.
    pub fn from_state(state: GameState) -> Self {
        let status = if state.board.is_terminal() {
            GameStatus::Terminal
        } else {
            GameStatus::Active
        };
        Self {
            board: state.board,
            status,
            started: state.board != Board::EMPTY,
            moves: state.moves,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
