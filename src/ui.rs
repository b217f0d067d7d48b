#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{board::Board, common::Tile, config::BOARD_SIZE};

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

const fn style(bg: u32, fg: u32) -> TileStyle {
    TileStyle {
        background: Rgb((bg >> 16) as u8, (bg >> 8) as u8, bg as u8),
        foreground: Rgb((fg >> 16) as u8, (fg >> 8) as u8, fg as u8),
    }
}

const EMPTY_STYLE: TileStyle = style(0x9e948a, 0x776e65);
const BIG_TILE_STYLE: TileStyle = style(0x3c3a32, 0xf9f6f2);

/// Classic palette, keyed by tile value.
const PALETTE: [(Tile, TileStyle); 11] = [
    (2, style(0xeee4da, 0x776e65)),
    (4, style(0xede0c8, 0x776e65)),
    (8, style(0xf2b179, 0xf9f6f2)),
    (16, style(0xf59563, 0xf9f6f2)),
    (32, style(0xf67c5f, 0xf9f6f2)),
    (64, style(0xf65e3b, 0xf9f6f2)),
    (128, style(0xedcf72, 0xf9f6f2)),
    (256, style(0xedcc61, 0xf9f6f2)),
    (512, style(0xedc850, 0xf9f6f2)),
    (1024, style(0xedc53f, 0xf9f6f2)),
    (2048, style(0xedc22e, 0xf9f6f2)),
];

/// Colours for a cell holding `value`. Values past 2048 share one dark style.
pub fn tile_style(value: Tile) -> TileStyle {
    if value == 0 {
        return EMPTY_STYLE;
    }
    PALETTE
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(BIG_TILE_STYLE, |(_, s)| *s)
}

const CELL_WIDTH: usize = 6;

/// Render the board as a block of text, one line per row plus borders.
///
/// With `color` set, each cell is painted using ANSI 24-bit escapes.
pub fn render_board(board: &Board, color: bool) -> String {
    let border = {
        let mut line = String::from("+");
        for _ in 0..BOARD_SIZE {
            line.push_str(&"-".repeat(CELL_WIDTH));
            line.push('+');
        }
        line
    };
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in board.rows() {
        out.push('|');
        for &value in row {
            let text = if value == 0 {
                String::new()
            } else {
                value.to_string()
            };
            let cell = format!("{:^width$}", text, width = CELL_WIDTH);
            if color {
                let TileStyle {
                    background: Rgb(br, bg, bb),
                    foreground: Rgb(fr, fg, fb),
                } = tile_style(value);
                let _ = write!(
                    out,
                    "\x1b[1;38;2;{};{};{};48;2;{};{};{}m{}\x1b[0m",
                    fr, fg, fb, br, bg, bb, cell
                );
            } else {
                out.push_str(&cell);
            }
            out.push('|');
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}
