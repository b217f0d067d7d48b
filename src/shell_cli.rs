#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    game::GameState,
    shell::{parse_command, Command, Shell},
    ui::render_board,
};

/// Line-based terminal shell: one command per line on input, boards on output.
pub struct CliShell<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl CliShell<io::StdinLock<'static>, io::Stdout> {
    /// Shell bound to the process stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> CliShell<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Give back the output sink, e.g. to inspect what was drawn.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Shell for CliShell<R, W> {
    fn render(&mut self, state: &GameState) {
        let text = render_board(&state.board, self.color);
        let res = write!(self.output, "\n{}Moves: {}\n", text, state.moves)
            .and_then(|()| self.output.flush());
        if let Err(e) = res {
            log::warn!("failed to draw board: {}", e);
        }
    }

    fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        write!(self.output, "Move [w/a/s/d, q to quit]: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Some(Command::Quit));
        }
        Ok(parse_command(&line))
    }

    fn game_over(&mut self, state: &GameState) {
        let res = writeln!(
            self.output,
            "\nGame Over! Highest tile: {}",
            state.board.highest_tile()
        );
        if let Err(e) = res {
            log::warn!("failed to report game over: {}", e);
        }
    }
}
