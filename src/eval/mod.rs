//! Evaluation module for Renju positions
//!
//! This module provides the fixed, hand-tuned heuristic used by the search.
//! The evaluation considers:
//! - Consecutive runs (fives, fours, threes, twos) in all four directions
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, stone_score, win_probability};
pub use patterns::{run_score, RunScore};
