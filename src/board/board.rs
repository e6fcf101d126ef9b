//! Board structure with move history and win tracking

use std::fmt;

use super::{Direction, Pos, Stone, BOARD_SIZE, COLUMN_LETTERS, DIRECTIONS};
use crate::error::MoveError;

/// A move as recorded in the history. Immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
    /// 1-based, equal to the number of prior moves + 1
    pub number: u32,
}

impl Move {
    #[inline]
    pub fn row(&self) -> u8 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> u8 {
        self.pos.col
    }

    /// Human notation of the move position, e.g. "H8"
    pub fn coordinate(&self) -> String {
        self.pos.coordinate()
    }
}

/// Game board: grid, move history, turn and terminal status.
///
/// The board knows nothing about forbidden moves; callers consult
/// [`crate::rules`] before placing Black stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    history: Vec<Move>,
    current_turn: Stone,
    game_over: bool,
    winner: Option<Stone>,
    winning_line: Vec<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            history: Vec::with_capacity(BOARD_SIZE * BOARD_SIZE),
            current_turn: Stone::Black,
            game_over: false,
            winner: None,
            winning_line: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn is_valid_position(&self, pos: Pos) -> bool {
        pos.in_bounds()
    }

    /// Get stone at position (`Empty` when off the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if pos.in_bounds() {
            self.grid[pos.row as usize][pos.col as usize]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.grid[pos.row as usize][pos.col as usize] == Stone::Empty
    }

    /// Raw cell write with no bookkeeping. Only the probe guard uses this.
    #[inline]
    pub(crate) fn set_cell(&mut self, pos: Pos, stone: Stone) {
        self.grid[pos.row as usize][pos.col as usize] = stone;
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Maximal same-stone run through the winning move, ordered along the line.
    /// Empty unless the game is over.
    #[inline]
    pub fn winning_line(&self) -> &[Pos] {
        &self.winning_line
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Place a stone, returning `false` (and leaving the board untouched)
    /// when the move is rejected.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        self.try_place(pos, stone).is_ok()
    }

    /// Place a stone, run win detection and pass the turn.
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<&Move, MoveError> {
        if !stone.is_stone() {
            return Err(MoveError::EmptyStone);
        }
        if !self.is_valid_position(pos) {
            return Err(MoveError::InvalidPosition(pos));
        }
        if self.game_over {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::OccupiedCell(pos));
        }

        self.set_cell(pos, stone);
        let number = self.history.len() as u32 + 1;
        self.history.push(Move { pos, stone, number });

        if let Some(line) = self.find_win(pos, stone) {
            self.game_over = true;
            self.winner = Some(stone);
            self.winning_line = line;
        }

        self.current_turn = stone.opponent();
        Ok(&self.history[self.history.len() - 1])
    }

    /// Undo the most recent move, returning `false` when there is none.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Pop the last move. The undone player is to move again and any
    /// terminal state is cleared.
    pub fn try_undo(&mut self) -> Result<Move, MoveError> {
        let last = self.history.pop().ok_or(MoveError::EmptyHistory)?;
        self.set_cell(last.pos, Stone::Empty);
        self.current_turn = last.stone;
        self.game_over = false;
        self.winner = None;
        self.winning_line.clear();
        Ok(last)
    }

    /// Count consecutive `stone` cells through `pos` along `dir`, both ways.
    /// The cell at `pos` itself counts as 1 regardless of its content.
    pub fn count_consecutive(&self, pos: Pos, stone: Stone, dir: Direction) -> usize {
        1 + self.run_length(pos, stone, dir, 1) + self.run_length(pos, stone, dir, -1)
    }

    /// Positions of the consecutive `stone` run through `pos`, ordered from
    /// the negative end of `dir` to the positive end.
    pub fn line_stones(&self, pos: Pos, stone: Stone, dir: Direction) -> Vec<Pos> {
        let back = self.run_length(pos, stone, dir, -1) as i32;
        let forward = self.run_length(pos, stone, dir, 1) as i32;
        (-back..=forward)
            .filter_map(|step| pos.offset(dir, step))
            .collect()
    }

    /// Number of `stone` cells directly after `pos` walking `sign` along `dir`
    fn run_length(&self, pos: Pos, stone: Stone, dir: Direction, sign: i32) -> usize {
        let mut count = 0;
        let mut step = sign;
        while let Some(next) = pos.offset(dir, step) {
            if self.get(next) != stone {
                break;
            }
            count += 1;
            step += sign;
        }
        count
    }

    /// Renju win condition: Black needs exactly five, White five or more.
    fn is_winning_run(stone: Stone, count: usize) -> bool {
        match stone {
            Stone::Black => count == 5,
            Stone::White => count >= 5,
            Stone::Empty => false,
        }
    }

    /// First direction in which the stone at `pos` completes a win
    fn find_win(&self, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
        DIRECTIONS
            .iter()
            .find(|&&dir| Self::is_winning_run(stone, self.count_consecutive(pos, stone, dir)))
            .map(|&dir| self.line_stones(pos, stone, dir))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|s| s.is_stone())
            .count()
    }

    /// Check if no stone is on the grid
    pub fn is_board_empty(&self) -> bool {
        self.grid.iter().flatten().all(|s| !s.is_stone())
    }

    /// All occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, s)| s.is_stone())
                .map(move |(c, &s)| (Pos::new(r as u8, c as u8), s))
        })
    }

    /// All empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .filter(|&p| self.is_empty(p))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row printed last-first so that row 1 sits at the bottom
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for (i, &letter) in COLUMN_LETTERS.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        writeln!(f)?;

        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{:2} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let ch = match self.grid[row][col] {
                    Stone::Black => '●',
                    Stone::White => '○',
                    Stone::Empty => '·',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
