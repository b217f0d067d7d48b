#![cfg(feature = "std")]

//! The seam between the engine and whatever draws the board.
//!
//! A [`Shell`] only renders snapshots and hands back commands. All game rules
//! stay in [`GameEngine`].

use crate::{
    common::Direction,
    game::{GameEngine, GameState, GameStatus},
    tiles::TileSource,
};

/// Input the shell can hand to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Interface implemented by presentation front ends.
pub trait Shell {
    /// Draw the current snapshot.
    fn render(&mut self, state: &GameState);

    /// Read the next command.
    ///
    /// `Ok(None)` means the input was not recognised and should be ignored.
    /// End of input is reported as `Ok(Some(Command::Quit))`.
    fn next_command(&mut self) -> anyhow::Result<Option<Command>>;

    /// Called once when the session reaches its terminal state.
    fn game_over(&mut self, _state: &GameState) {}
}

/// Map a typed key or word to a command. Anything else yields `None`.
pub fn parse_command(input: &str) -> Option<Command> {
    let cmd = match input.trim().to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => Command::Move(Direction::Up),
        "s" | "j" | "down" => Command::Move(Direction::Down),
        "a" | "h" | "left" => Command::Move(Direction::Left),
        "d" | "l" | "right" => Command::Move(Direction::Right),
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Drive a session to completion against `shell`.
///
/// Starts the engine if it has not been started, renders the opening board,
/// then processes one command at a time until the player quits or the board
/// is terminal. Returns the final snapshot.
pub fn run_session<S, T>(
    shell: &mut S,
    engine: &mut GameEngine,
    src: &mut T,
) -> anyhow::Result<GameState>
where
    S: Shell + ?Sized,
    T: TileSource + ?Sized,
{
    if !engine.is_started() {
        engine.start(src)?;
    }
    shell.render(&engine.state());
    if engine.status() == GameStatus::Terminal {
        shell.game_over(&engine.state());
        return Ok(engine.state());
    }
    loop {
        let dir = match shell.next_command()? {
            Some(Command::Move(dir)) => dir,
            Some(Command::Quit) => {
                log::info!("player quit after {} moves", engine.moves());
                break;
            }
            None => continue,
        };
        if !engine.play(dir, src).changed() {
            continue;
        }
        let state = engine.state();
        shell.render(&state);
        if state.status == GameStatus::Terminal {
            shell.game_over(&state);
            break;
        }
    }
    Ok(engine.state())
}
