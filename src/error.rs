//! Error types for board commands and configuration loading

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

/// Why a board command was rejected.
///
/// All of these are local and non-fatal: the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({}, {}) is outside the board", .0.row, .0.col)]
    InvalidPosition(Pos),

    #[error("{} is already occupied", .0.coordinate())]
    OccupiedCell(Pos),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("no move to undo")]
    EmptyHistory,

    #[error("cannot place an empty stone")]
    EmptyStone,
}

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Background search failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("search worker stopped without a result")]
    WorkerLost,
}
