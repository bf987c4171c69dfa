//! Check, checkmate and stalemate detection.
//!
//! A side is in check when any enemy piece may move onto its king's square
//! under that piece's ordinary movement rule. Because the king's square is
//! occupied, capture geometry applies uniformly: a pawn only gives check
//! diagonally, a slider only along an open line.
//!
//! All queries assume the queried side has exactly one king on the board.
//! Board setup must guarantee that; a missing king is reported as "not in
//! check" and logged.

use crate::Board;
use fusion_core::{Grid, PieceKind, Position, Side};
use std::collections::HashSet;
use tracing::warn;

/// Returns true if any piece not owned by `side` may move to `square`.
fn attacked(grid: &Grid, side: Side, square: Position) -> bool {
    grid.pieces()
        .filter(|piece| piece.owner != side)
        .any(|piece| piece.is_valid_move(grid, square))
}

impl Board {
    /// Returns true if `side`'s king is attacked.
    pub fn in_check(&self, side: Side) -> bool {
        match self.king_position(side) {
            Some(king) => attacked(self.grid(), side, king),
            None => {
                warn!(%side, "check query without a king on the board");
                false
            }
        }
    }

    /// Returns true if moving the piece on `from` to `target` would leave
    /// its owner in check.
    ///
    /// The move is tried on a scratch copy of the grid, so the board is
    /// never observed in the intermediate state. `target` is expected to
    /// have passed the piece's own rule already. Returns false when `from`
    /// is empty.
    pub fn would_cause_own_check(&self, from: Position, target: Position) -> bool {
        let Some(piece) = self.get(from) else {
            return false;
        };
        let king = if piece.kind == PieceKind::King {
            Some(target)
        } else {
            self.king_position(piece.owner)
        };
        let Some(king) = king else {
            return false;
        };

        let mut scratch = self.grid().clone();
        scratch.relocate(from, target);
        attacked(&scratch, piece.owner, king)
    }

    /// Returns the squares the piece on `from` may legally move to: those its
    /// rule allows that do not leave its own king in check.
    pub fn legal_moves(&self, from: Position) -> HashSet<Position> {
        let Some(piece) = self.get(from) else {
            return HashSet::new();
        };
        piece
            .possible_moves(self.grid())
            .into_iter()
            .filter(|&target| !self.would_cause_own_check(from, target))
            .collect()
    }

    /// Returns true if no piece of `side` has a move that keeps its king safe.
    pub fn no_legal_moves(&self, side: Side) -> bool {
        let grid = self.grid();
        grid.pieces_of(side).all(|piece| {
            piece
                .possible_moves(grid)
                .into_iter()
                .all(|target| self.would_cause_own_check(piece.position, target))
        })
    }

    /// Returns true if `side` is in check and cannot get out of it.
    pub fn in_checkmate(&self, side: Side) -> bool {
        self.in_check(side) && self.no_legal_moves(side)
    }

    /// Returns true if `side` is not in check but has no legal move.
    pub fn in_stalemate(&self, side: Side) -> bool {
        !self.in_check(side) && self.no_legal_moves(side)
    }
}
