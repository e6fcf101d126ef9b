//! Main application for the Renju GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::Config;
use crate::Stone;

/// Main Renju application
pub struct RenjuApp {
    config: Config,
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mode = GameMode::PvE {
            human_color: config.ui.human_color.stone(),
        };
        Self {
            state: GameState::new(mode, &config),
            config,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        if mode == self.state.mode {
            self.state.reset();
        } else {
            self.state.cancel_ai();
            self.state = GameState::new(mode, &self.config);
            log::info!("new game ({mode:?})");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Stone::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Stone::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                    ui.checkbox(&mut self.config.ui.show_forbidden, "Forbidden Cells (F)");
                    ui.checkbox(&mut self.config.ui.show_coordinates, "Coordinates");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and search diagnostics
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("RENJU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_score_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }

                ui.add_space(10.0);
                self.render_history_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let board = &self.state.board;
            let (title, status, color) = match board.winner() {
                Some(winner) => (format!("{} WINS", winner.name().to_uppercase()), "Game over".to_string(), WIN_HIGHLIGHT),
                None => {
                    let turn = self.state.current_turn();
                    let status = if self.state.is_ai_thinking() {
                        let secs = self.state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        format!("AI thinking... {secs:.1}s")
                    } else if self.state.is_human_turn() {
                        format!("Your turn ({:.1}s)", self.state.move_timer.elapsed().as_secs_f32())
                    } else {
                        "Waiting for AI".to_string()
                    };
                    (turn.name().to_uppercase(), status, TEXT_SECONDARY)
                }
            };

            ui.horizontal(|ui| {
                let stone = board.winner().unwrap_or_else(|| board.current_turn());
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(40.0), egui::Sense::hover());
                let fill = if stone == Stone::Black { BLACK_STONE } else { WHITE_STONE };
                ui.painter().circle_filled(rect.center(), 18.0, fill);

                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI move: {:.2}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Static evaluation and win probability for the viewer's side
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let perspective = self.state.perspective();
            let probability = self.state.win_probability();

            ui.label(RichText::new(format!("POSITION ({})", perspective.name())).size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{:.0}%", probability * 100.0))
                        .size(24.0)
                        .strong()
                        .color(probability_color(probability)),
                );
                ui.label(
                    RichText::new(format!("score {}", self.state.position_score()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            });
            ui.add(egui::ProgressBar::new(probability as f32).fill(probability_color(probability)));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let idle = !self.state.is_ai_thinking();
            let running = !self.state.is_game_over();
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    let mode = self.state.mode;
                    self.new_game(mode);
                }
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
            });
            ui.horizontal(|ui| {
                if ui.add_enabled(idle && running, egui::Button::new("Hint")).clicked() {
                    self.state.request_hint();
                }
                if ui.add_enabled(idle && running, egui::Button::new("AI Move")).clicked() {
                    self.play_ai_move_now();
                }
            });
        });
    }

    /// Let the engine play the side to move. In PvE the AI takes over
    /// that side from here on.
    fn play_ai_move_now(&mut self) {
        let human_color = self.state.current_turn().opponent();
        if let GameMode::PvE { human_color: current } = self.state.mode {
            if current != human_color {
                self.state.mode = GameMode::PvE { human_color };
            }
        } else {
            self.state.request_hint();
            if let Some(pos) = self.state.hint {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        }
    }

    /// Search diagnostics of the last AI move or hint
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            if let Some(pos) = result.best_move {
                ui.label(RichText::new(format!("-> {}", pos.coordinate())).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            if result.timed_out {
                ui.label(RichText::new("stopped on time budget").size(10.0).color(EVEN));
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Numbered move list with coordinates
    fn render_history_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ScrollArea::vertical().stick_to_bottom(true).max_height(220.0).show(ui, |ui| {
                for mv in self.state.board.history() {
                    let symbol = if mv.stone == Stone::Black { "●" } else { "○" };
                    ui.label(
                        RichText::new(format!("{:>3}. {symbol} {}", mv.number, mv.coordinate()))
                            .monospace()
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                }
            });
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let overlay = BoardOverlay {
                hint: self.state.hint,
                forbidden: &self.state.forbidden,
                show_forbidden: self.config.ui.show_forbidden,
                show_coordinates: self.config.ui.show_coordinates,
                interactive: self.state.is_human_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over(),
            };

            if let Some(pos) = self.board_view.show(ui, &self.state.board, &overlay) {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    log::info!("move {} rejected: {msg}", pos.coordinate());
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, forbidden, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::F),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if forbidden {
            self.config.ui.show_forbidden = !self.config.ui.show_forbidden;
        }
        if hint {
            self.state.request_hint();
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            let mode = self.state.mode;
            self.new_game(mode);
        }
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || (self.state.is_human_turn() && !self.state.is_game_over()) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
