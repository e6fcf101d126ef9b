//! Search module for the Renju AI
//!
//! Contains:
//! - Search limits (depth, time budget, candidate widths, stop flag)
//! - Candidate generation with one-ply move ordering
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod limits;

pub use alphabeta::{SearchResult, Searcher};
pub use candidates::{generate_candidates, neighborhood, CandidateMove};
pub use limits::SearchLimits;
