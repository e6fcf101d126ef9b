//! Renju rules
//!
//! Win detection lives on the [`Board`](crate::board::Board) itself; this
//! module implements the restrictions on Black:
//! - Double-three (3-3)
//! - Double-four (4-4)
//! - Overline (6+ in a row)

pub mod forbidden;
pub mod pattern;

// Re-exports for convenient access
pub use forbidden::{
    count_open_fours, count_open_threes, forbidden_kinds, forbidden_positions, forbidden_reason,
    is_double_four, is_double_three, is_forbidden_move, is_overline, ForbiddenKind,
};
pub use pattern::Cell;
