//! Per-kind movement rules.
//!
//! Each piece kind has one [`MoveRule`] implementation. A rule answers two
//! questions about a piece standing on a [`Grid`]:
//!
//! - [`is_valid_move`](MoveRule::is_valid_move): may the piece go to this
//!   square under its own movement shape and blocking? This is the single
//!   authoritative predicate.
//! - [`possible_moves`](MoveRule::possible_moves): which squares may it go
//!   to? Derived by filtering the rule's candidate squares through
//!   `is_valid_move`, so the two never disagree.
//!
//! Neither question considers whether the move exposes the mover's king.
//! That is the board's job.

mod elephant;
mod king;
mod knight;
mod pawn;
mod slider;
mod soldier;

pub use elephant::Elephant;
pub use king::King;
pub use knight::Knight;
pub use pawn::Pawn;
pub use slider::{Bishop, Queen, Rook};
pub use soldier::Soldier;

use crate::{Grid, Piece, Position};
use std::collections::HashSet;

/// Movement behavior for one piece kind.
pub trait MoveRule {
    /// Returns true if `piece` may move to `target` under this rule,
    /// including the shared [`Piece::basic_check`] and any blocking.
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool;

    /// Returns the squares worth testing for `piece`.
    ///
    /// Every square the rule could accept must be among the candidates.
    /// Candidates may be off the grid or otherwise invalid.
    fn candidates(&self, piece: &Piece, grid: &Grid) -> Vec<Position>;

    /// Returns every square `piece` may move to under this rule.
    fn possible_moves(&self, piece: &Piece, grid: &Grid) -> HashSet<Position> {
        self.candidates(piece, grid)
            .into_iter()
            .filter(|&target| self.is_valid_move(piece, grid, target))
            .collect()
    }
}

/// Offsets to the eight surrounding squares.
pub(crate) const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks from `from` along each direction, collecting squares until the edge
/// of the grid. The first occupied square on a ray is included and ends it.
pub(crate) fn ray_squares(grid: &Grid, from: Position, directions: &[(i32, i32)]) -> Vec<Position> {
    let mut squares = Vec::new();
    for &(rank_step, file_step) in directions {
        let mut square = from.offset(rank_step, file_step);
        while grid.contains(square) {
            squares.push(square);
            if grid.is_occupied(square) {
                break;
            }
            square = square.offset(rank_step, file_step);
        }
    }
    squares
}

/// Offsets from `from`.
pub(crate) fn offset_squares(from: Position, offsets: &[(i32, i32)]) -> Vec<Position> {
    offsets
        .iter()
        .map(|&(rank_delta, file_delta)| from.offset(rank_delta, file_delta))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{Grid, Piece, PieceKind, Position, Side};
    use std::collections::HashSet;

    pub fn grid_with(pieces: &[(PieceKind, Side, i32, i32)]) -> Grid {
        let mut grid = Grid::new(8, 8);
        for &(kind, side, rank, file) in pieces {
            assert!(grid.put(Piece::new(kind, side, Position::new(rank, file))));
        }
        grid
    }

    pub fn at(grid: &Grid, rank: i32, file: i32) -> Piece {
        *grid.get(Position::new(rank, file)).expect("piece on square")
    }

    pub fn squares(list: &[(i32, i32)]) -> HashSet<Position> {
        list.iter().map(|&(r, f)| Position::new(r, f)).collect()
    }

    /// Every on-grid square for which `is_valid_move` holds.
    pub fn brute_force(piece: &Piece, grid: &Grid) -> HashSet<Position> {
        let mut valid = HashSet::new();
        for rank in 0..grid.height() {
            for file in 0..grid.width() {
                let target = Position::new(rank, file);
                if piece.is_valid_move(grid, target) {
                    valid.insert(target);
                }
            }
        }
        valid
    }
}
