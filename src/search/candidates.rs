//! Candidate move generation and ordering

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::evaluate;

/// A move together with the score that ranked it.
///
/// From [`generate_candidates`] the score is the static evaluation after the
/// move; from the searcher it is the backed-up search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub pos: Pos,
    pub score: i32,
}

/// Empty cells within `radius` (8-connected square) of any stone, in
/// row-major order. Empty when the board has no stones.
pub fn neighborhood(board: &Board, radius: usize) -> Vec<Pos> {
    let mut near = [[false; BOARD_SIZE]; BOARD_SIZE];
    let radius = radius as i32;

    for (pos, _) in board.occupied() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = Pos::checked(i32::from(pos.row) + dr, i32::from(pos.col) + dc) {
                    near[p.row as usize][p.col as usize] = true;
                }
            }
        }
    }

    let mut cells = Vec::with_capacity(64);
    for (r, row) in near.iter().enumerate() {
        for (c, &is_near) in row.iter().enumerate() {
            let pos = Pos::new(r as u8, c as u8);
            if is_near && board.is_empty(pos) {
                cells.push(pos);
            }
        }
    }
    cells
}

/// Generate up to `limit` candidate moves for `stone`, best first.
///
/// Each cell is scored by probing `stone` there and evaluating from
/// `stone`'s perspective. The sort is stable, so equal scores keep
/// row-major order. An empty board yields the center alone.
pub fn generate_candidates(board: &mut Board, stone: Stone, radius: usize, limit: usize) -> Vec<CandidateMove> {
    if board.is_board_empty() {
        let center = Pos::center();
        let score = board.with_probe(center, stone, |b| evaluate(b, stone));
        return vec![CandidateMove { pos: center, score }];
    }

    let mut scored: Vec<CandidateMove> = neighborhood(board, radius)
        .into_iter()
        .map(|pos| {
            let score = board.with_probe(pos, stone, |b| evaluate(b, stone));
            CandidateMove { pos, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
