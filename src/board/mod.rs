//! Board representation for Renju

pub mod board;
pub mod probe;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Move};
pub use probe::Probe;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Column letters used in move notation (no `I`)
pub const COLUMN_LETTERS: &[u8; BOARD_SIZE] = b"ABCDEFGHJKLMNOP";

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_stone(self) -> bool {
        self != Stone::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board.
///
/// A `Pos` may lie outside the board; `Board::is_valid_position` is the
/// authority on bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The center cell, (7, 7) on a 15x15 board
    #[inline]
    pub const fn center() -> Self {
        Self::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Signed constructor: `None` when (row, col) is off the board
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Step `steps` cells along `dir` (negative steps walk backwards)
    #[inline]
    pub fn offset(self, dir: Direction, steps: i32) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Self::checked(self.row as i32 + dr * steps, self.col as i32 + dc * steps)
    }

    /// Human notation, e.g. (7, 7) -> "H8"
    pub fn coordinate(self) -> String {
        let letter = COLUMN_LETTERS
            .get(self.col as usize)
            .map_or('?', |&b| b as char);
        format!("{}{}", letter, self.row as u32 + 1)
    }

    /// Parse human notation ("H8", case-insensitive)
    pub fn from_coordinate(coord: &str) -> Option<Self> {
        let mut chars = coord.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.iter().position(|&b| b as char == letter)?;
        let row: usize = chars.as_str().parse().ok()?;
        if row == 0 || row > BOARD_SIZE {
            return None;
        }
        Some(Self::new((row - 1) as u8, col as u8))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// One representative vector per undirected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Diagonal,
    Direction::AntiDiagonal,
];

impl Direction {
    /// (row delta, col delta)
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}
