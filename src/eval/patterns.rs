//! Reward table for the heuristic evaluation
//!
//! A stone earns one reward per direction, keyed on the length of the
//! consecutive run it belongs to in that direction.

/// Run-length rewards
pub struct RunScore;

impl RunScore {
    /// Five in a row
    pub const FIVE: i32 = 100_000;
    pub const FOUR: i32 = 10_000;
    pub const THREE: i32 = 1_000;
    pub const TWO: i32 = 100;
    /// Isolated stone, or any run not listed above (including overlines)
    pub const SINGLE: i32 = 10;
}

/// Points per unit of Manhattan distance closer to the center
pub const CENTER_WEIGHT: i32 = 5;

/// Largest Manhattan distance from the center cell on a 15x15 board
pub const MAX_CENTER_DIST: i32 = 14;

/// Reward for a run of `len` stones in one direction
#[inline]
pub fn run_score(len: usize) -> i32 {
    match len {
        5 => RunScore::FIVE,
        4 => RunScore::FOUR,
        3 => RunScore::THREE,
        2 => RunScore::TWO,
        _ => RunScore::SINGLE,
    }
}
