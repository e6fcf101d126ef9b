//! GUI module for the Renju game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::RenjuApp;
pub use game_state::{GameMode, GameState};
