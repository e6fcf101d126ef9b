//! Renju forbidden moves for Black
//!
//! Black may not play a move that creates:
//! - two or more open threes (double-three, 3-3)
//! - two or more open fours (double-four, 4-4)
//! - a run of six or more (overline)
//!
//! White is never restricted. Every check probes the live board: the
//! Black stone is written into the target cell through a [`Probe`] guard,
//! the patterns are read, and the cell is restored when the guard drops.
//!
//! Threes and fours are exact window matches (`_XXX_` inside six cells,
//! `_XXXX_` inside seven), not run-length counts, so a line blocked on
//! either flank by White or the board edge is never open.
//!
//! [`Probe`]: crate::board::Probe

use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Board, Direction, Pos, Stone, BOARD_SIZE, DIRECTIONS};

use super::pattern::{contains_pattern, line_window, Cell, FOUR_WINDOW, OPEN_FOUR, OPEN_THREE, THREE_WINDOW};

/// Which Renju restriction a move breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenKind {
    DoubleThree,
    DoubleFour,
    Overline,
}

impl fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ForbiddenKind::DoubleThree => "Double Three (3-3)",
            ForbiddenKind::DoubleFour => "Double Four (4-4)",
            ForbiddenKind::Overline => "Overline (6+ stones)",
        })
    }
}

/// Open three through `pos` along `dir`. Assumes the Black stone is on the board.
fn open_three_in(board: &Board, pos: Pos, dir: Direction) -> bool {
    let window: [Cell; THREE_WINDOW] = line_window(board, pos, dir);
    contains_pattern(&window, &OPEN_THREE)
}

/// Open four through `pos` along `dir`. Assumes the Black stone is on the board.
fn open_four_in(board: &Board, pos: Pos, dir: Direction) -> bool {
    let window: [Cell; FOUR_WINDOW] = line_window(board, pos, dir);
    contains_pattern(&window, &OPEN_FOUR)
}

/// Number of directions where `open_in` matches, stopping early at `cap`
fn count_directions(board: &Board, pos: Pos, cap: usize, open_in: fn(&Board, Pos, Direction) -> bool) -> usize {
    let mut count = 0;
    for &dir in &DIRECTIONS {
        if open_in(board, pos, dir) {
            count += 1;
            if count >= cap {
                break;
            }
        }
    }
    count
}

/// Count the directions in which the stone at `pos` forms an open three.
///
/// The Black stone must already be at `pos` (e.g. under a probe).
pub fn count_open_threes(board: &Board, pos: Pos) -> usize {
    count_directions(board, pos, DIRECTIONS.len(), open_three_in)
}

/// Count the directions in which the stone at `pos` forms an open four.
///
/// The Black stone must already be at `pos` (e.g. under a probe).
pub fn count_open_fours(board: &Board, pos: Pos) -> usize {
    count_directions(board, pos, DIRECTIONS.len(), open_four_in)
}

fn has_double_three(board: &Board, pos: Pos) -> bool {
    count_directions(board, pos, 2, open_three_in) >= 2
}

fn has_double_four(board: &Board, pos: Pos) -> bool {
    count_directions(board, pos, 2, open_four_in) >= 2
}

fn has_overline(board: &Board, pos: Pos) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| board.count_consecutive(pos, Stone::Black, dir) >= 6)
}

/// Can `pos` be probed at all? Off-board and occupied cells are never forbidden.
#[inline]
fn probeable(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

/// Would a Black stone at `pos` make a run of six or more?
pub fn is_overline(board: &mut Board, pos: Pos) -> bool {
    probeable(board, pos) && board.with_probe(pos, Stone::Black, |b| has_overline(b, pos))
}

/// Would a Black stone at `pos` form open threes in two or more directions?
pub fn is_double_three(board: &mut Board, pos: Pos) -> bool {
    probeable(board, pos) && board.with_probe(pos, Stone::Black, |b| has_double_three(b, pos))
}

/// Would a Black stone at `pos` form open fours in two or more directions?
pub fn is_double_four(board: &mut Board, pos: Pos) -> bool {
    probeable(board, pos) && board.with_probe(pos, Stone::Black, |b| has_double_four(b, pos))
}

/// Check if placing `stone` at `pos` is forbidden.
///
/// Always `false` for White, and for cells that are off the board or
/// already occupied.
///
/// # Arguments
/// * `board` - Board to probe; returned unchanged
/// * `pos` - Position being considered
/// * `stone` - Color of the stone being placed
pub fn is_forbidden_move(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    if stone != Stone::Black || !probeable(board, pos) {
        return false;
    }
    board.with_probe(pos, Stone::Black, |b| {
        has_double_three(b, pos) || has_double_four(b, pos) || has_overline(b, pos)
    })
}

/// Every restriction a move at `pos` would break, in 3-3, 4-4, overline order.
pub fn forbidden_kinds(board: &mut Board, pos: Pos, stone: Stone) -> Vec<ForbiddenKind> {
    if stone != Stone::Black || !probeable(board, pos) {
        return Vec::new();
    }
    board.with_probe(pos, Stone::Black, |b| {
        let mut kinds = Vec::with_capacity(3);
        if has_double_three(b, pos) {
            kinds.push(ForbiddenKind::DoubleThree);
        }
        if has_double_four(b, pos) {
            kinds.push(ForbiddenKind::DoubleFour);
        }
        if has_overline(b, pos) {
            kinds.push(ForbiddenKind::Overline);
        }
        kinds
    })
}

/// Human-readable reason a move is forbidden, e.g.
/// `"Double Three (3-3), Overline (6+ stones)"`. Empty when allowed.
pub fn forbidden_reason(board: &mut Board, pos: Pos, stone: Stone) -> String {
    forbidden_kinds(board, pos, stone)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// All empty cells where `stone` may not play. Always empty for White.
pub fn forbidden_positions(board: &mut Board, stone: Stone) -> BTreeSet<Pos> {
    let mut forbidden = BTreeSet::new();
    if stone != Stone::Black {
        return forbidden;
    }
    for idx in 0..BOARD_SIZE * BOARD_SIZE {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) && is_forbidden_move(board, pos, stone) {
            forbidden.insert(pos);
        }
    }
    forbidden
}
