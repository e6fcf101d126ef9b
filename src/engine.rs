//! AI engine façade
//!
//! Callers either search synchronously on their own board (hints, tests)
//! or hand a snapshot to a worker thread and poll for the answer, which is
//! what the desktop front-end does to stay responsive.
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, Board, Pos, Stone};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new();
//!
//! let result = engine.best_move(&mut board, Stone::Black);
//! assert_eq!(result.best_move, Some(Pos::new(7, 7)));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::error::EngineError;
use crate::search::{SearchLimits, SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up search score of the best move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// The search returned early on its time budget or a cancel
    pub timed_out: bool,
}

impl From<SearchResult> for MoveResult {
    fn from(result: SearchResult) -> Self {
        Self {
            best_move: result.best_move.map(|m| m.pos),
            score: result.best_move.map_or(0, |m| m.score),
            time_ms: result.elapsed.as_millis() as u64,
            nodes: result.nodes,
            timed_out: result.timed_out,
        }
    }
}

/// Main AI engine for Renju.
///
/// Owns the search configuration; each query runs a fresh [`Searcher`].
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: SearchConfig,
}

impl AIEngine {
    /// Create an engine with default settings (depth 3, 5 s budget).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
    }

    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.config.time_limit_ms = time_ms;
    }

    /// Search `board` for `color` on the calling thread.
    ///
    /// The board is used as scratch space and is restored before returning.
    pub fn best_move(&self, board: &mut Board, color: Stone) -> MoveResult {
        Searcher::with_config(&self.config).search(board, color).into()
    }

    /// Convenience wrapper returning only the move.
    pub fn get_move(&self, board: &mut Board, color: Stone) -> Option<Pos> {
        self.best_move(board, color).best_move
    }

    /// Search a snapshot of the position on a worker thread.
    pub fn spawn(&self, board: Board, color: Stone) -> SearchJob {
        let stop = Arc::new(AtomicBool::new(false));
        let limits = SearchLimits::from(&self.config).with_stop_flag(Arc::clone(&stop));
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let mut board = board;
            let result = Searcher::with_limits(limits).search(&mut board, color);
            if tx.send(MoveResult::from(result)).is_err() {
                log::debug!("search result for {} discarded", color.name());
            }
        });

        log::info!("{} search started", color.name());
        SearchJob {
            receiver: rx,
            stop,
            handle: Some(handle),
            color,
            start_time: Instant::now(),
        }
    }
}

/// A search running on a worker thread.
///
/// Dropping the job raises its stop flag so an abandoned search winds down
/// at its next check point.
pub struct SearchJob {
    receiver: Receiver<MoveResult>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    color: Stone,
    start_time: Instant,
}

impl SearchJob {
    /// Color being searched for
    pub fn color(&self) -> Stone {
        self.color
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Non-blocking poll: `Ok(None)` while the worker is still thinking.
    pub fn try_result(&self) -> Result<Option<MoveResult>, EngineError> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                log::warn!("{} search worker disconnected", self.color.name());
                Err(EngineError::WorkerLost)
            }
        }
    }

    /// Ask the worker to stop; it still reports its best move so far.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Block until the worker reports.
    pub fn wait(mut self) -> Result<MoveResult, EngineError> {
        let result = self.receiver.recv().map_err(|_| EngineError::WorkerLost);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("{} search worker panicked", self.color.name());
            }
        }
        result
    }
}

impl Drop for SearchJob {
    fn drop(&mut self) {
        self.cancel();
    }
}
