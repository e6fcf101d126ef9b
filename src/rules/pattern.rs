//! Fixed-length line windows for exact pattern matching
//!
//! Open threes and fours are recognised by exact comparison against a
//! short window of cells sampled along one direction. Cells past the
//! board edge are [`Cell::OffBoard`], which never equals `Empty`, so a
//! pattern can't match across the edge.

use crate::board::{Board, Direction, Pos, Stone};

/// Window cell: a board stone, or the off-board sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    OffBoard,
}

impl From<Stone> for Cell {
    #[inline]
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Empty => Cell::Empty,
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

/// `_XXX_`
pub const OPEN_THREE: [Cell; 5] = [Cell::Empty, Cell::Black, Cell::Black, Cell::Black, Cell::Empty];

/// `_XXXX_`
pub const OPEN_FOUR: [Cell; 6] = [
    Cell::Empty,
    Cell::Black,
    Cell::Black,
    Cell::Black,
    Cell::Black,
    Cell::Empty,
];

/// Window length scanned for an open three
pub const THREE_WINDOW: usize = 6;

/// Window length scanned for an open four
pub const FOUR_WINDOW: usize = 7;

/// Sample `L` cells along `dir`, starting `L / 2` cells before `pos`.
pub fn line_window<const L: usize>(board: &Board, pos: Pos, dir: Direction) -> [Cell; L] {
    let start = -((L / 2) as i32);
    let mut window = [Cell::OffBoard; L];
    for (i, cell) in window.iter_mut().enumerate() {
        if let Some(p) = pos.offset(dir, start + i as i32) {
            *cell = board.get(p).into();
        }
    }
    window
}

/// True if any contiguous sub-window of `line` equals `pattern` exactly
#[inline]
pub fn contains_pattern(line: &[Cell], pattern: &[Cell]) -> bool {
    line.windows(pattern.len()).any(|w| w == pattern)
}
