//! Search limits and cooperative cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::SearchConfig;

/// Bounds on a single search invocation.
///
/// The time budget and the stop flag are polled at the same points: at the
/// root before each candidate and on entry to every interior node. Neither
/// preempts a subtree already being expanded.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum depth in plies
    pub max_depth: u8,
    /// Wall-clock budget
    pub time_limit: Duration,
    /// Candidates kept at the root after ordering
    pub root_candidates: usize,
    /// Candidates kept at interior nodes after ordering
    pub node_candidates: usize,
    /// Chebyshev radius around occupied cells for candidate generation
    pub neighbor_radius: usize,
    stop: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    pub fn new(max_depth: u8, time_limit: Duration) -> Self {
        Self {
            max_depth,
            time_limit,
            ..Self::default()
        }
    }

    /// Attach a shared stop flag. Setting it to `true` from any thread makes
    /// the search return at its next check point.
    #[must_use]
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for SearchLimits {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            time_limit: config.time_limit(),
            // A zero width would leave the root with nothing to play
            root_candidates: config.root_candidates.max(1),
            node_candidates: config.node_candidates.max(1),
            neighbor_radius: config.neighbor_radius,
            stop: None,
        }
    }
}
