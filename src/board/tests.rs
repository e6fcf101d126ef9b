use super::*;
use crate::error::MoveError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::center();
    assert_eq!(pos, Pos::new(7, 7));
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(Pos::from_index(112), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 15));
    assert!(Pos::new(14, 14).in_bounds());
    assert!(!Pos::new(15, 3).in_bounds());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_coordinate_notation() {
    assert_eq!(Pos::new(7, 7).coordinate(), "H8");
    assert_eq!(Pos::new(0, 0).coordinate(), "A1");
    // No `I` column
    assert_eq!(Pos::new(0, 8).coordinate(), "J1");
    assert_eq!(Pos::new(14, 14).coordinate(), "P15");
    assert_eq!(Pos::new(0, 13).coordinate(), "O1");
    assert_eq!(Pos::from_coordinate("h8"), Some(Pos::new(7, 7)));
    assert_eq!(Pos::from_coordinate("P15"), Some(Pos::new(14, 14)));
    assert_eq!(Pos::from_coordinate("Q1"), None);
    assert_eq!(Pos::from_coordinate("I3"), None);
    assert_eq!(Pos::from_coordinate("A16"), None);
    assert_eq!(Pos::from_coordinate("A0"), None);
}

#[test]
fn test_new_board() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.current_turn(), Stone::Black);
    assert!(!board.is_game_over());
    assert_eq!(board.winner(), None);
    assert!(board.winning_line().is_empty());
    assert_eq!(board.empty_positions().len(), TOTAL_CELLS);
}

#[test]
fn test_place_records_move_and_flips_turn() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(7, 7), Stone::Black));
    assert!(board.place(Pos::new(7, 8), Stone::White));

    let history = board.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].number, 1);
    assert_eq!(history[1].number, 2);
    assert_eq!(history[1].stone, Stone::White);
    assert_eq!(board.current_turn(), Stone::Black);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.last_move().map(Move::coordinate), Some("J8".to_string()));
}

#[test]
fn test_place_rejections() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black);
    let before = board.clone();

    assert_eq!(
        board.try_place(Pos::new(7, 7), Stone::White).err(),
        Some(MoveError::OccupiedCell(Pos::new(7, 7)))
    );
    assert_eq!(
        board.try_place(Pos::new(15, 0), Stone::White).err(),
        Some(MoveError::InvalidPosition(Pos::new(15, 0)))
    );
    assert_eq!(
        board.try_place(Pos::new(1, 1), Stone::Empty).err(),
        Some(MoveError::EmptyStone)
    );
    assert_eq!(board, before);
}

#[test]
fn test_place_rejected_after_game_over() {
    let mut board = Board::new();
    for c in 0..5 {
        board.place(Pos::new(0, c), Stone::White);
    }
    assert!(board.is_game_over());
    assert_eq!(
        board.try_place(Pos::new(5, 5), Stone::Black).err(),
        Some(MoveError::GameAlreadyOver)
    );
}

#[test]
fn test_undo_empty_history() {
    let mut board = Board::new();
    assert!(!board.undo());
    assert_eq!(board.try_undo(), Err(MoveError::EmptyHistory));
}

#[test]
fn test_undo_restores_previous_state() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black);
    let before = board.clone();

    board.place(Pos::new(6, 6), Stone::White);
    let undone = board.try_undo().expect("one move to undo");
    assert_eq!(undone.pos, Pos::new(6, 6));
    assert_eq!(board, before);
    assert_eq!(board.current_turn(), Stone::White);
}

#[test]
fn test_undo_clears_terminal_state() {
    let mut board = Board::new();
    for c in 3..7 {
        board.place(Pos::new(4, c), Stone::Black);
        board.place(Pos::new(10, c * 2), Stone::White);
    }
    let before = board.clone();
    board.place(Pos::new(4, 7), Stone::Black);
    assert_eq!(board.winner(), Some(Stone::Black));

    assert!(board.undo());
    assert_eq!(board, before);
    assert!(!board.is_game_over());
    assert!(board.winning_line().is_empty());
    assert_eq!(board.current_turn(), Stone::Black);
}

#[test]
fn test_black_exact_five_wins() {
    let mut board = Board::new();
    for c in 7..=10 {
        board.place(Pos::new(7, c), Stone::Black);
    }
    assert!(board.place(Pos::new(7, 6), Stone::Black));
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Stone::Black));
    let expected: Vec<Pos> = (6..=10).map(|c| Pos::new(7, c)).collect();
    assert_eq!(board.winning_line(), expected.as_slice());
}

#[test]
fn test_black_overline_is_not_a_win() {
    let mut board = Board::new();
    for c in [2, 3, 4, 6, 7] {
        board.place(Pos::new(7, c), Stone::Black);
    }
    // Fills the gap into a run of six
    assert!(board.place(Pos::new(7, 5), Stone::Black));
    assert_eq!(board.count_consecutive(Pos::new(7, 5), Stone::Black, Direction::Horizontal), 6);
    assert!(!board.is_game_over());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_white_overline_wins_with_full_line() {
    let mut board = Board::new();
    for r in [2, 3, 4, 6, 7] {
        board.place(Pos::new(r, 9), Stone::White);
    }
    assert!(board.place(Pos::new(5, 9), Stone::White));
    assert_eq!(board.winner(), Some(Stone::White));
    let expected: Vec<Pos> = (2..=7).map(|r| Pos::new(r, 9)).collect();
    assert_eq!(board.winning_line(), expected.as_slice());
}

#[test]
fn test_diagonal_wins() {
    let mut board = Board::new();
    for i in 0..5 {
        board.place(Pos::new(i, i), Stone::White);
    }
    assert_eq!(board.winner(), Some(Stone::White));
    assert_eq!(board.winning_line().first(), Some(&Pos::new(0, 0)));
    assert_eq!(board.winning_line().last(), Some(&Pos::new(4, 4)));

    let mut board = Board::new();
    for i in 0..5u8 {
        board.place(Pos::new(i, 14 - i), Stone::Black);
    }
    assert_eq!(board.winner(), Some(Stone::Black));
    assert_eq!(board.winning_line().len(), 5);
}

#[test]
fn test_count_consecutive_stops_at_edge_and_opponent() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Stone::Black);
    board.place(Pos::new(0, 1), Stone::Black);
    board.place(Pos::new(0, 2), Stone::White);
    assert_eq!(board.count_consecutive(Pos::new(0, 0), Stone::Black, Direction::Horizontal), 2);
    assert_eq!(board.count_consecutive(Pos::new(0, 0), Stone::Black, Direction::Vertical), 1);
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black);
    let copy = board.clone();
    board.place(Pos::new(8, 8), Stone::White);
    assert_eq!(copy.history().len(), 1);
    assert_eq!(copy.get(Pos::new(8, 8)), Stone::Empty);
    assert_eq!(copy.current_turn(), Stone::White);
}

#[test]
fn test_display_lists_stones() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Stone::Black);
    let text = board.to_string();
    assert!(text.starts_with("   A B C"));
    assert!(text.lines().last().is_some_and(|l| l.starts_with(" 1 ●")));
}
