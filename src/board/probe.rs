//! Scoped hypothetical placement
//!
//! Rule analysis and search both ask "what if this stone were here?" by
//! writing the stone straight into the grid and restoring the cell
//! afterwards. [`Probe`] owns that restore: the original cell value comes
//! back when the guard is dropped, on every exit path including early
//! returns and unwinding.

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Stone};

/// Guard holding a hypothetical stone on a board.
///
/// Derefs to the probed [`Board`], so analysis and recursion run on the
/// guard as if it were the board itself. Only the grid cell is touched;
/// history, turn and terminal state are left as they were.
#[must_use = "the probe is undone as soon as the guard is dropped"]
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Stone,
}

impl<'a> Probe<'a> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Board {
    /// Temporarily put `stone` at `pos` until the returned guard drops.
    /// Callers check `pos` against the board first.
    #[inline]
    pub(crate) fn probe(&mut self, pos: Pos, stone: Stone) -> Probe<'_> {
        debug_assert!(pos.in_bounds(), "probe outside the board: {pos:?}");
        let previous = self.get(pos);
        self.set_cell(pos, stone);
        Probe {
            board: self,
            pos,
            previous,
        }
    }

    /// Run `f` with `stone` hypothetically placed at `pos`.
    #[inline]
    pub(crate) fn with_probe<R>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut probe = self.probe(pos, stone);
        f(&mut *probe)
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.set_cell(self.pos, self.previous);
    }
}
