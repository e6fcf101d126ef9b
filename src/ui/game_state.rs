//! Game state management for the Renju GUI

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::engine::{AIEngine, MoveResult, SearchJob};
use crate::eval::{evaluate, win_probability};
use crate::rules::{forbidden_positions, forbidden_reason};
use crate::{Board, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking(SearchJob),
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub hint: Option<Pos>,
    pub message: Option<String>,
    /// Cells Black may not play, refreshed after every move
    pub forbidden: BTreeSet<Pos>,

    engine: AIEngine,
    hint_engine: AIEngine,
}

impl GameState {
    pub fn new(mode: GameMode, config: &Config) -> Self {
        let mut state = Self {
            board: Board::new(),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            hint: None,
            message: None,
            forbidden: BTreeSet::new(),
            engine: AIEngine::with_config(config.search.clone()),
            hint_engine: AIEngine::with_config(config.hint.clone()),
        };
        state.refresh_forbidden();
        state
    }

    pub fn reset(&mut self) {
        self.cancel_ai();
        self.board = Board::new();
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.hint = None;
        self.message = None;
        self.refresh_forbidden();
        log::info!("new game ({:?})", self.mode);
    }

    pub fn current_turn(&self) -> Stone {
        self.board.current_turn()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking(_))
    }

    /// Attempt to place a stone for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let turn = self.current_turn();
        let reason = forbidden_reason(&mut self.board, pos, turn);
        if !reason.is_empty() {
            return Err(format!("Forbidden move: {reason}"));
        }

        self.execute_move(pos)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), String> {
        let color = self.current_turn();
        let number = self
            .board
            .try_place(pos, color)
            .map_err(|err| err.to_string())?
            .number;

        log::info!("move {number}: {} {}", color.name(), pos.coordinate());
        self.move_timer.stop();
        self.hint = None;
        self.message = None;

        if let Some(winner) = self.board.winner() {
            log::info!("{} wins after {number} moves", winner.name());
        } else {
            self.move_timer.start();
        }
        self.refresh_forbidden();
        Ok(())
    }

    /// Recompute the forbidden cells shown while Black is to move
    pub fn refresh_forbidden(&mut self) {
        self.forbidden = if !self.is_game_over() && self.current_turn() == Stone::Black {
            forbidden_positions(&mut self.board, Stone::Black)
        } else {
            BTreeSet::new()
        };
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }
        let job = self.engine.spawn(self.board.clone(), self.current_turn());
        self.ai_state = AiState::Thinking(job);
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let polled = match &self.ai_state {
            AiState::Thinking(job) => job.try_result().map(|r| r.map(|result| (result, job.elapsed()))),
            AiState::Idle => return,
        };

        match polled {
            Ok(None) => {}
            Ok(Some((result, elapsed))) => {
                self.ai_state = AiState::Idle;
                self.move_timer.set_ai_time(elapsed);
                self.last_ai_result = Some(result.clone());

                match result.best_move {
                    Some(pos) => {
                        if let Err(msg) = self.execute_move(pos) {
                            log::warn!("AI move {} rejected: {msg}", pos.coordinate());
                            self.message = Some(msg);
                        }
                    }
                    None => self.message = Some("AI could not find a move".to_string()),
                }
            }
            Err(err) => {
                self.ai_state = AiState::Idle;
                self.message = Some(format!("AI error: {err}"));
            }
        }
    }

    /// Drop any running search; the worker stops at its next check point
    pub fn cancel_ai(&mut self) {
        if let AiState::Thinking(job) = std::mem::replace(&mut self.ai_state, AiState::Idle) {
            job.cancel();
            log::info!("{} search cancelled", job.color().name());
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking(job) => Some(job.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to move without playing it
    pub fn request_hint(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let color = self.current_turn();
        let result = self.hint_engine.best_move(&mut self.board, color);
        self.hint = result.best_move;
        if self.hint.is_none() {
            self.message = Some("No move to suggest".to_string());
        }
        self.last_ai_result = Some(result);
    }

    /// Undo the last move; in PvE, if that was the AI's reply, the human
    /// move before it as well, so the human is to move again
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            // The AI has not replied yet
            self.cancel_ai();
        }
        let ai_color = match self.mode {
            GameMode::PvE { human_color } => Some(human_color.opponent()),
            GameMode::PvP => None,
        };

        let Ok(last) = self.board.try_undo() else {
            self.message = Some("Nothing to undo".to_string());
            return;
        };
        let mut undone = 1;
        if Some(last.stone) == ai_color && self.board.try_undo().is_ok() {
            undone += 1;
        }

        log::info!("undid {undone} move(s)");
        self.hint = None;
        self.message = None;
        self.move_timer.start();
        self.refresh_forbidden();
    }

    /// Side whose advantage the score display shows
    pub fn perspective(&self) -> Stone {
        match self.mode {
            GameMode::PvE { human_color } => human_color,
            GameMode::PvP => Stone::Black,
        }
    }

    pub fn position_score(&self) -> i32 {
        evaluate(&self.board, self.perspective())
    }

    pub fn win_probability(&self) -> f64 {
        win_probability(&self.board, self.perspective())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn fast_config() -> Config {
        let search = SearchConfig {
            max_depth: 1,
            time_limit_ms: 5_000,
            ..SearchConfig::default()
        };
        Config {
            search: search.clone(),
            hint: search,
            ..Config::default()
        }
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() {
            assert!(Instant::now() < deadline, "AI did not answer");
            state.check_ai_result();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_pvp_moves_alternate() {
        let mut state = GameState::new(GameMode::PvP, &fast_config());
        assert!(state.try_place_stone(Pos::new(7, 7)).is_ok());
        assert_eq!(state.current_turn(), Stone::White);
        assert!(state.try_place_stone(Pos::new(7, 8)).is_ok());
        assert_eq!(state.board.history().len(), 2);
        assert!(state.try_place_stone(Pos::new(7, 8)).is_err());
    }

    #[test]
    fn test_forbidden_move_rejected_before_place() {
        let mut state = GameState::new(GameMode::PvP, &fast_config());
        for (b, w) in [((7, 5), (0, 0)), ((7, 6), (0, 2)), ((5, 7), (0, 4)), ((6, 7), (0, 6))] {
            state.try_place_stone(Pos::new(b.0, b.1)).unwrap();
            state.try_place_stone(Pos::new(w.0, w.1)).unwrap();
        }
        assert!(state.forbidden.contains(&Pos::new(7, 7)));

        let err = state.try_place_stone(Pos::new(7, 7)).unwrap_err();
        assert!(err.contains("Double Three"));
        assert!(state.board.is_empty(Pos::new(7, 7)));
        assert_eq!(state.current_turn(), Stone::Black);
    }

    #[test]
    fn test_forbidden_cleared_on_white_turn() {
        let mut state = GameState::new(GameMode::PvP, &fast_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.forbidden.is_empty());
    }

    #[test]
    fn test_pve_ai_replies_and_undo_removes_both() {
        let mut state = GameState::new(GameMode::default(), &fast_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.is_ai_turn());
        assert!(state.try_place_stone(Pos::new(8, 8)).is_err());

        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.board.history().len(), 2);
        assert!(state.last_ai_result.is_some());
        assert!(state.is_human_turn());

        state.undo();
        assert!(state.board.is_board_empty());
        assert_eq!(state.current_turn(), Stone::Black);
    }

    #[test]
    fn test_undo_after_human_win_keeps_ai_reply() {
        let mut state = GameState::new(GameMode::default(), &fast_config());
        for col in 3..7 {
            state.try_place_stone(Pos::new(7, col)).unwrap();
            assert!(state.board.place(Pos::new(0, col * 2), Stone::White));
        }
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.is_game_over());
        assert_eq!(state.board.history().len(), 9);

        state.undo();
        assert_eq!(state.board.history().len(), 8);
        assert!(!state.is_game_over());
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_undo_while_thinking_removes_human_move() {
        let config = Config {
            search: SearchConfig {
                max_depth: 6,
                ..SearchConfig::default()
            },
            ..fast_config()
        };
        let mut state = GameState::new(GameMode::default(), &config);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        state.undo();
        assert!(!state.is_ai_thinking());
        assert!(state.board.is_board_empty());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_ai_opens_when_human_is_white() {
        let mut state = GameState::new(
            GameMode::PvE {
                human_color: Stone::White,
            },
            &fast_config(),
        );
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.board.get(Pos::center()), Stone::Black);
    }

    #[test]
    fn test_hint_does_not_move() {
        let mut state = GameState::new(GameMode::PvP, &fast_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        let before = state.board.clone();

        state.request_hint();
        assert!(state.hint.is_some());
        assert_eq!(state.board, before);

        let hint = state.hint.unwrap();
        state.try_place_stone(hint).unwrap();
        assert_eq!(state.hint, None);
    }

    #[test]
    fn test_undo_empty_reports() {
        let mut state = GameState::new(GameMode::PvP, &fast_config());
        state.undo();
        assert_eq!(state.message.as_deref(), Some("Nothing to undo"));
    }

    #[test]
    fn test_score_from_human_perspective() {
        let mut state = GameState::new(
            GameMode::PvE {
                human_color: Stone::White,
            },
            &fast_config(),
        );
        state.board.place(Pos::center(), Stone::Black);
        assert_eq!(state.position_score(), -110);
        assert!(state.win_probability() < 0.5);
    }
}
