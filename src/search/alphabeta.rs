//! Minimax search with alpha-beta pruning
//!
//! The searcher explores hypothetical moves by probing them onto the
//! caller's board and restoring the cell when the probe guard drops, so the
//! board is unchanged on every exit path, including an early stop.
//!
//! # Features
//!
//! - Fixed-depth minimax with alpha-beta cutoffs
//! - Candidate moves restricted to the neighborhood of existing stones and
//!   ordered by a one-ply static evaluation
//! - Forbidden Black moves skipped at every ply
//! - Wall-clock budget and cooperative stop flag, polled at the root before
//!   each candidate and on entry to every node
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use renju::board::{Board, Pos, Stone};
//! use renju::search::Searcher;
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new(3, Duration::from_secs(5));
//!
//! let best = searcher.best_move(&mut board, Stone::Black);
//! assert_eq!(best.map(|m| m.pos), Some(Pos::new(7, 7)));
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::rules::is_forbidden_move;

use super::candidates::{generate_candidates, CandidateMove};
use super::limits::SearchLimits;

/// Bound for alpha-beta windows
const INF: i32 = i32::MAX;

/// Result of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move and its backed-up score, `None` only when no legal
    /// candidate exists
    pub best_move: Option<CandidateMove>,
    /// Nodes visited (interior and leaf)
    pub nodes: u64,
    /// Wall-clock time spent
    pub elapsed: Duration,
    /// The time budget ran out or the stop flag was raised
    pub timed_out: bool,
}

/// Alpha-beta searcher.
///
/// Holds no state across calls beyond the counters of the last search.
pub struct Searcher {
    limits: SearchLimits,
    nodes: u64,
    start: Instant,
    elapsed: Duration,
    timed_out: bool,
}

impl Searcher {
    /// Create a searcher with default candidate widths.
    pub fn new(max_depth: u8, time_limit: Duration) -> Self {
        Self::with_limits(SearchLimits::new(max_depth, time_limit))
    }

    pub fn with_config(config: &SearchConfig) -> Self {
        Self::with_limits(SearchLimits::from(config))
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            nodes: 0,
            start: Instant::now(),
            elapsed: Duration::ZERO,
            timed_out: false,
        }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Time spent by the last search
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Best move for `stone`, or `None` when there is nothing to play.
    pub fn best_move(&mut self, board: &mut Board, stone: Stone) -> Option<CandidateMove> {
        self.search(board, stone).best_move
    }

    /// Search the position for `stone` and report diagnostics.
    pub fn search(&mut self, board: &mut Board, stone: Stone) -> SearchResult {
        self.nodes = 0;
        self.timed_out = false;
        self.start = Instant::now();

        let best_move = if !stone.is_stone() {
            None
        } else if board.is_board_empty() {
            let center = Pos::center();
            let score = board.with_probe(center, stone, |b| evaluate(b, stone));
            Some(CandidateMove { pos: center, score })
        } else {
            self.search_root(board, stone)
        };

        self.elapsed = self.start.elapsed();
        log::debug!(
            "search {}: best {:?}, {} nodes in {:?}{}",
            stone.name(),
            best_move.map(|m| (m.pos.coordinate(), m.score)),
            self.nodes,
            self.elapsed,
            if self.timed_out { " (stopped early)" } else { "" },
        );

        SearchResult {
            best_move,
            nodes: self.nodes,
            elapsed: self.elapsed,
            timed_out: self.timed_out,
        }
    }

    fn search_root(&mut self, board: &mut Board, stone: Stone) -> Option<CandidateMove> {
        let candidates = generate_candidates(
            board,
            stone,
            self.limits.neighbor_radius,
            self.limits.root_candidates,
        );
        let depth = self.limits.max_depth.saturating_sub(1);

        let mut best: Option<CandidateMove> = None;
        let mut alpha = -INF;

        for candidate in candidates {
            // At least one legal candidate is always searched
            if best.is_some() && self.should_stop() {
                break;
            }
            if is_forbidden_move(board, candidate.pos, stone) {
                continue;
            }

            let score = board.with_probe(candidate.pos, stone, |b| {
                self.alpha_beta(b, depth, alpha, INF, false, stone)
            });

            if best.map_or(true, |b| score > b.score) {
                best = Some(CandidateMove { pos: candidate.pos, score });
            }
            alpha = alpha.max(score);
        }

        best
    }

    /// Minimax value of the position for `perspective`.
    ///
    /// `maximizing` selects whose stone moves at this ply: `perspective`'s
    /// when true, the opponent's otherwise.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        perspective: Stone,
    ) -> i32 {
        self.nodes += 1;

        if self.should_stop() || depth == 0 || board.is_game_over() {
            return evaluate(board, perspective);
        }

        let to_move = if maximizing {
            perspective
        } else {
            perspective.opponent()
        };
        let candidates = generate_candidates(
            board,
            to_move,
            self.limits.neighbor_radius,
            self.limits.node_candidates,
        );

        let mut best: Option<i32> = None;
        for candidate in candidates {
            if is_forbidden_move(board, candidate.pos, to_move) {
                continue;
            }

            let score = board.with_probe(candidate.pos, to_move, |b| {
                self.alpha_beta(b, depth - 1, alpha, beta, !maximizing, perspective)
            });

            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        // No legal candidate: fall back to the static score
        best.unwrap_or_else(|| evaluate(board, perspective))
    }

    /// Poll the time budget and the stop flag.
    #[inline]
    fn should_stop(&mut self) -> bool {
        if self.limits.is_cancelled() || self.start.elapsed() > self.limits.time_limit {
            self.timed_out = true;
        }
        self.timed_out
    }
}
