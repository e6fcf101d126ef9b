//! Renju engine: board, rules, evaluation and search
//!
//! Renju is Gomoku on a 15x15 board with restrictions on Black:
//! - Black wins only with exactly five in a row; White wins with five or more
//! - Black may not play a double-three, a double-four or an overline
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, move history and win detection
//! - [`rules`]: Forbidden-move analysis for Black
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Engine façade with a background worker
//! - [`config`]: TOML configuration
//! - [`ui`]: egui desktop front-end
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, Board, Pos, Stone};
//! use renju::config::SearchConfig;
//!
//! let mut board = Board::new();
//! let engine = AIEngine::with_config(SearchConfig { max_depth: 2, ..SearchConfig::default() });
//!
//! board.place(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&mut board, Stone::White) {
//!     board.place(pos, Stone::White);
//!     println!("AI plays at {}", pos.coordinate());
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Move, Pos, Stone, BOARD_SIZE};
pub use config::Config;
pub use engine::{AIEngine, MoveResult, SearchJob};
pub use error::{ConfigError, EngineError, MoveError};
