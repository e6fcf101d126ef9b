//! Heuristic evaluation function for Renju board positions
//!
//! This module provides the static evaluation used by the search and by
//! the live position-strength display. It scores:
//! - Consecutive runs through every stone, once per direction
//! - Positional bonuses (center control)
//!
//! The evaluation is zero-sum: a stone counts for `perspective` when it
//! matches, against it otherwise. It does not know about forbidden moves;
//! the search filters illegal Black moves before scoring.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::patterns::{run_score, CENTER_WEIGHT, MAX_CENTER_DIST};

/// Scale applied to the score before the logistic in [`win_probability`]
const PROBABILITY_SCALE: f64 = 1_000.0;

/// Bound on the scaled score so `exp` stays well inside f64 range
const PROBABILITY_CLAMP: f64 = 10.0;

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `perspective`
/// - Negative values indicate disadvantage for `perspective`
///
/// # Arguments
/// * `board` - The current board state
/// * `perspective` - The color to evaluate for
#[must_use]
pub fn evaluate(board: &Board, perspective: Stone) -> i32 {
    board
        .occupied()
        .map(|(pos, stone)| {
            let score = stone_score(board, pos, stone);
            if stone == perspective {
                score
            } else {
                -score
            }
        })
        .sum()
}

/// Score contributed by the stone at `pos`.
///
/// A stone central to several lines is rewarded once for each of them.
#[must_use]
pub fn stone_score(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let lines: i32 = DIRECTIONS
        .iter()
        .map(|&dir| run_score(board.count_consecutive(pos, stone, dir)))
        .sum();
    lines + center_bonus(pos)
}

/// `(14 - manhattan distance to the center) * 5`
#[inline]
fn center_bonus(pos: Pos) -> i32 {
    let center = Pos::center();
    let dist = (pos.row as i32 - center.row as i32).abs() + (pos.col as i32 - center.col as i32).abs();
    (MAX_CENTER_DIST - dist) * CENTER_WEIGHT
}

/// Map the evaluation onto (0, 1) with a logistic curve.
///
/// 0.5 is an even position; scores are scaled down by 1000 so that an
/// open-three-sized advantage already reads as clearly favourable.
#[must_use]
pub fn win_probability(board: &Board, perspective: Stone) -> f64 {
    let scaled = (f64::from(evaluate(board, perspective)) / PROBABILITY_SCALE)
        .clamp(-PROBABILITY_CLAMP, PROBABILITY_CLAMP);
    1.0 / (1.0 + (-scaled).exp())
}
