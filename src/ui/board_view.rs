//! Board rendering for the Renju GUI

use std::collections::BTreeSet;

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{BOARD_SIZE, COLUMN_LETTERS};
use crate::{Board, Pos, Stone};

use super::theme::*;

/// Overlays drawn on top of the stones
pub struct BoardOverlay<'a> {
    pub hint: Option<Pos>,
    /// Cells forbidden for the side to move
    pub forbidden: &'a BTreeSet<Pos>,
    pub show_forbidden: bool,
    pub show_coordinates: bool,
    /// Accept clicks (human to move, game running)
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        if overlay.show_coordinates {
            self.draw_coordinates(&painter);
        }

        for (pos, stone) in board.occupied() {
            self.draw_stone(&painter, pos, stone);
        }
        if let Some(last) = board.last_move() {
            self.draw_last_move_marker(&painter, last.pos, last.stone);
        }
        if !board.winning_line().is_empty() {
            self.draw_winning_line(&painter, board.winning_line());
        }
        if overlay.show_forbidden {
            for &pos in overlay.forbidden {
                self.draw_forbidden_marker(&painter, pos);
            }
        }
        if let Some(pos) = overlay.hint {
            self.draw_hint(&painter, pos, board.current_turn());
        }

        if !overlay.interactive {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let playable = board.is_empty(board_pos) && !overlay.forbidden.contains(&board_pos);
        let color = if playable {
            hover_valid(board.current_turn() == Stone::Black)
        } else {
            hover_invalid()
        };
        painter.circle_filled(self.board_to_screen(board_pos), self.stone_radius(), color);

        // Forbidden clicks still go through so the caller can explain why
        if response.clicked() && board.is_empty(board_pos) {
            Some(board_pos)
        } else {
            None
        }
    }

    fn stone_radius(&self) -> f32 {
        self.cell_size * STONE_RADIUS_RATIO
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let min = self.board_rect.min;
            painter.line_segment(
                [min + Vec2::new(offset, BOARD_MARGIN), min + Vec2::new(offset, BOARD_MARGIN + span)],
                stroke,
            );
            painter.line_segment(
                [min + Vec2::new(BOARD_MARGIN, offset), min + Vec2::new(BOARD_MARGIN + span, offset)],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            painter.circle_filled(self.board_to_screen(Pos::new(row, col)), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters (A-P, no I) and row numbers (1-15, bottom up)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for (col, &letter) in COLUMN_LETTERS.iter().enumerate() {
            let x = self.board_to_screen(Pos::new(0, col as u8)).x;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::CENTER_CENTER,
                    letter as char,
                    font.clone(),
                    GRID_LINE,
                );
            }
        }

        for row in 0..BOARD_SIZE {
            let y = self.board_to_screen(Pos::new(row as u8, 0)).y;
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::CENTER_CENTER,
                    (row + 1).to_string(),
                    font.clone(),
                    GRID_LINE,
                );
            }
        }
    }

    /// Draw a single stone with shadow and highlight
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();
        let shadow = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(center + shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let color = if stone == Stone::Black {
            LAST_MOVE_MARKER
        } else {
            Color32::from_rgb(200, 40, 40)
        };
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, color);
    }

    /// Connect and ring the stones of the winning run
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), self.stone_radius() + 3.0, stroke);
        }
    }

    /// Small cross on a cell Black may not play
    fn draw_forbidden_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let d = self.cell_size * 0.2;
        let stroke = Stroke::new(2.0, FORBIDDEN_MARKER);
        painter.line_segment([center + Vec2::new(-d, -d), center + Vec2::new(d, d)], stroke);
        painter.line_segment([center + Vec2::new(-d, d), center + Vec2::new(d, -d)], stroke);
    }

    fn draw_hint(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();

        painter.circle_filled(center, radius, hover_valid(turn == Stone::Black));
        painter.circle_stroke(center, radius, Stroke::new(2.0, HINT_RING));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            HINT_RING,
        );
    }

    /// Convert screen coordinates to board position (row 0 at the bottom)
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = BOARD_SIZE as i32 - 1 - y.floor() as i32;
        Pos::checked(row, col)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (BOARD_SIZE - 1 - pos.row as usize) as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
