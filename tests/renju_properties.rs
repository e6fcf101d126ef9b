//! Cross-module properties of the Renju engine

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use renju::board::{Board, Pos, Stone, DIRECTIONS};
use renju::eval::evaluate;
use renju::rules::{
    count_open_threes, forbidden_kinds, forbidden_reason, is_double_four, is_double_three, is_forbidden_move,
    is_overline, ForbiddenKind,
};
use renju::search::Searcher;
use renju::{AIEngine, MoveError};

/// Play `moves` random legal moves for the side to move, stopping early if
/// the game ends.
fn random_playout(rng: &mut StdRng, moves: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..moves {
        if board.is_game_over() {
            break;
        }
        let empty = board.empty_positions();
        let Some(&pos) = empty.choose(rng) else { break };
        assert!(board.place(pos, board.current_turn()));
    }
    board
}

#[test]
fn place_then_undo_restores_everything() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let len = rng.gen_range(0..60);
        let mut board = random_playout(&mut rng, len);
        let before = board.clone();

        let empty = board.empty_positions();
        let pos = *empty.choose(&mut rng).unwrap();
        let stone = if rng.gen_bool(0.5) { Stone::Black } else { Stone::White };

        if board.place(pos, stone) {
            assert!(board.undo());
            assert_eq!(board, before);
        } else {
            assert!(before.is_game_over());
            assert_eq!(board, before);
        }
    }
}

#[test]
fn undo_unwinds_a_whole_game() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new();
    let mut snapshots = vec![board.clone()];
    while !board.is_game_over() && board.history().len() < 120 {
        let empty = board.empty_positions();
        let pos = *empty.choose(&mut rng).unwrap();
        board.place(pos, board.current_turn());
        snapshots.push(board.clone());
    }

    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        assert!(board.undo());
        assert_eq!(board, expected);
    }
    assert_eq!(board.try_undo(), Err(MoveError::EmptyHistory));
}

/// Build a run of `len` stones on row 7, joining two shorter runs last.
fn join_run(stone: Stone, len: u8) -> Board {
    let gap = len / 2;
    let mut board = Board::new();
    for c in (0..len).filter(|&c| c != gap) {
        assert!(board.place(Pos::new(7, c), stone));
    }
    assert!(!board.is_game_over());
    assert!(board.place(Pos::new(7, gap), stone));
    board
}

#[test]
fn black_wins_only_with_exactly_five() {
    for len in 5..=8 {
        let board = join_run(Stone::Black, len);
        assert_eq!(board.is_game_over(), len == 5, "run of {len}");
    }
}

#[test]
fn white_wins_with_five_or_more() {
    for len in 5..=8 {
        let board = join_run(Stone::White, len);
        assert!(board.is_game_over(), "run of {len}");
        assert_eq!(board.winner(), Some(Stone::White));
        assert_eq!(board.winning_line().len(), len as usize);
    }
}

#[test]
fn forbidden_never_applies_to_white() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let len = rng.gen_range(10..50);
        let mut board = random_playout(&mut rng, len);
        for pos in board.empty_positions() {
            assert!(!is_forbidden_move(&mut board, pos, Stone::White));
        }
    }
}

#[test]
fn rules_forbid_what_the_board_accepts() {
    let mut board = Board::new();
    for (r, c) in [(7, 5), (7, 6), (5, 7), (6, 7)] {
        board.place(Pos::new(r, c), Stone::Black);
    }
    let target = Pos::new(7, 7);

    assert!(is_forbidden_move(&mut board, target, Stone::Black));
    assert_eq!(forbidden_reason(&mut board, target, Stone::Black), "Double Three (3-3)");
    assert!(board.is_empty(target));

    // The board itself has no rule awareness
    assert!(board.place(target, Stone::Black));
    assert_eq!(board.get(target), Stone::Black);
    assert!(!board.is_game_over());
}

#[test]
fn overline_is_forbidden_and_not_a_win() {
    let mut board = Board::new();
    for c in [2, 3, 4, 6, 7] {
        board.place(Pos::new(9, c), Stone::Black);
    }
    let gap = Pos::new(9, 5);
    assert_eq!(forbidden_kinds(&mut board, gap, Stone::Black), vec![ForbiddenKind::Overline]);
    assert!(!is_forbidden_move(&mut board, gap, Stone::White));

    board.place(gap, Stone::Black);
    assert!(!board.is_game_over());
}

#[test]
fn off_board_cells_report_allowed_without_panicking() {
    let mut board = Board::new();
    for c in 0..4 {
        board.place(Pos::new(14, c), Stone::Black);
    }
    let before = board.clone();
    for pos in [Pos::new(15, 0), Pos::new(14, 15), Pos::new(200, 200)] {
        assert!(!is_forbidden_move(&mut board, pos, Stone::Black));
        assert!(!is_overline(&mut board, pos));
        assert!(!is_double_three(&mut board, pos));
        assert!(!is_double_four(&mut board, pos));
        assert!(forbidden_kinds(&mut board, pos, Stone::Black).is_empty());
        assert_eq!(forbidden_reason(&mut board, pos, Stone::Black), "");
        assert!(!board.place(pos, Stone::Black));
    }
    assert_eq!(board, before);
}

#[test]
fn three_against_the_edge_is_not_open() {
    let mut board = Board::new();
    board.place(Pos::new(0, 7), Stone::Black);
    board.place(Pos::new(1, 7), Stone::Black);
    board.place(Pos::new(2, 7), Stone::Black);
    assert_eq!(count_open_threes(&board, Pos::new(2, 7)), 0);

    let mut board = Board::new();
    board.place(Pos::new(7, 12), Stone::Black);
    board.place(Pos::new(7, 13), Stone::Black);
    board.place(Pos::new(7, 14), Stone::Black);
    assert_eq!(count_open_threes(&board, Pos::new(7, 14)), 0);
}

#[test]
fn completing_five_sets_terminal_state() {
    for end in [Pos::new(7, 6), Pos::new(7, 11)] {
        let mut board = Board::new();
        for c in 7..=10 {
            board.place(Pos::new(7, c), Stone::Black);
            board.place(Pos::new(0, c), Stone::White);
        }
        assert_eq!(board.current_turn(), Stone::Black);
        assert!(!is_forbidden_move(&mut board, end, Stone::Black));

        assert!(board.place(end, Stone::Black));
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Stone::Black));

        let cols: Vec<u8> = board.winning_line().iter().map(|p| p.col).collect();
        let first = end.col.min(7);
        assert_eq!(cols, (first..first + 5).collect::<Vec<_>>());
        assert!(board.winning_line().iter().all(|p| p.row == 7));
    }
}

#[test]
fn crossing_open_fours_are_a_double_four() {
    let mut board = Board::new();
    for (r, c) in [(7, 6), (7, 8), (7, 9), (6, 7), (8, 7), (9, 7)] {
        board.place(Pos::new(r, c), Stone::Black);
    }
    assert!(is_double_four(&mut board, Pos::new(7, 7)));
    assert!(is_forbidden_move(&mut board, Pos::new(7, 7), Stone::Black));
}

#[test]
fn empty_board_opens_in_the_center() {
    let mut board = Board::new();
    for depth in [0, 1, 3, 9] {
        for budget in [Duration::ZERO, Duration::from_secs(1)] {
            let best = Searcher::new(depth, budget).best_move(&mut board, Stone::Black);
            assert_eq!(best.map(|m| m.pos), Some(Pos::new(7, 7)));
        }
    }
}

#[test]
fn search_leaves_board_untouched() {
    let mut rng = StdRng::seed_from_u64(2024);
    let engine = AIEngine::with_config(renju::config::SearchConfig {
        max_depth: 2,
        ..Default::default()
    });
    for _ in 0..5 {
        let len = rng.gen_range(2..20);
        let mut board = random_playout(&mut rng, len);
        if board.is_game_over() {
            continue;
        }
        let before = board.clone();
        let turn = board.current_turn();
        let result = engine.best_move(&mut board, turn);
        assert_eq!(board, before);

        if let Some(pos) = result.best_move {
            assert!(board.is_empty(pos));
            assert!(!is_forbidden_move(&mut board, pos, turn));
        }
    }
}

#[test]
fn evaluation_is_zero_sum() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..20 {
        let len = rng.gen_range(0..40);
        let board = random_playout(&mut rng, len);
        assert_eq!(evaluate(&board, Stone::Black), -evaluate(&board, Stone::White));
    }
}

#[test]
fn line_stones_match_run_length() {
    let mut rng = StdRng::seed_from_u64(5);
    let board = random_playout(&mut rng, 80);
    for (pos, stone) in board.occupied() {
        for dir in DIRECTIONS {
            let line = board.line_stones(pos, stone, dir);
            assert_eq!(line.len(), board.count_consecutive(pos, stone, dir));
            assert!(line.contains(&pos));
            assert!(line.iter().all(|&p| board.get(p) == stone));
        }
    }
}
