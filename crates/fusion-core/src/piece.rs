//! Pieces placed on the board.

use crate::{Grid, PieceKind, Position, Side};
use std::collections::HashSet;

/// A piece: its kind, its owner, where it stands, and whether it has moved.
///
/// Pieces are plain values. The [`Grid`] holds them by value, so copying a
/// grid never shares a piece between the copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Side,
    pub position: Position,
    /// Set once the piece has made its first move.
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    pub const fn new(kind: PieceKind, owner: Side, position: Position) -> Self {
        Piece {
            kind,
            owner,
            position,
            has_moved: false,
        }
    }

    /// Returns the single-letter display name of this piece's kind.
    #[inline]
    pub const fn name(&self) -> char {
        self.kind.symbol()
    }

    /// Returns true if `other` belongs to the same side.
    #[inline]
    pub fn is_same_side(&self, other: &Piece) -> bool {
        self.owner == other.owner
    }

    /// Returns true if the move to `target` follows this piece's movement rule
    /// and is not blocked.
    ///
    /// This does not consider whether the move exposes the owner's king.
    pub fn is_valid_move(&self, grid: &Grid, target: Position) -> bool {
        self.kind.rule().is_valid_move(self, grid, target)
    }

    /// Returns every square this piece could reach under its movement rule,
    /// without considering king safety.
    pub fn possible_moves(&self, grid: &Grid) -> HashSet<Position> {
        self.kind.rule().possible_moves(self, grid)
    }

    /// Checks shared by every kind: the target is on the board, differs from
    /// the current square, and is not held by a piece of the same side.
    pub fn basic_check(&self, grid: &Grid, target: Position) -> bool {
        if !grid.contains(target) || target == self.position {
            return false;
        }
        match grid.get(target) {
            Some(occupant) => !self.is_same_side(occupant),
            None => true,
        }
    }

    /// Returns true if any square strictly between the current square and
    /// `target` is occupied, by either side.
    ///
    /// Only meaningful for straight or diagonal lines.
    pub fn is_blocked(&self, grid: &Grid, target: Position) -> bool {
        let (rank_delta, file_delta) = self.position.delta_to(target);
        let step_rank = rank_delta.signum();
        let step_file = file_delta.signum();
        let steps = rank_delta.abs().max(file_delta.abs());

        (1..steps).any(|i| {
            grid.is_occupied(self.position.offset(step_rank * i, step_file * i))
        })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.owner, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: PieceKind, owner: Side, rank: i32, file: i32) -> Piece {
        Piece::new(kind, owner, Position::new(rank, file))
    }

    #[test]
    fn new_piece_has_not_moved() {
        let p = piece(PieceKind::Pawn, Side::White, 1, 0);
        assert!(!p.has_moved);
        assert_eq!(p.name(), 'P');
    }

    #[test]
    fn basic_check_rejects_out_of_bounds() {
        let grid = Grid::new(8, 8);
        let p = piece(PieceKind::Queen, Side::White, 0, 0);
        assert!(!p.basic_check(&grid, Position::new(-1, 0)));
        assert!(!p.basic_check(&grid, Position::new(0, 8)));
        assert!(!p.basic_check(&grid, Position::new(8, 0)));
    }

    #[test]
    fn basic_check_rejects_null_move() {
        let grid = Grid::new(8, 8);
        let p = piece(PieceKind::Rook, Side::Black, 4, 4);
        assert!(!p.basic_check(&grid, Position::new(4, 4)));
    }

    #[test]
    fn basic_check_rejects_own_piece() {
        let mut grid = Grid::new(8, 8);
        let p = piece(PieceKind::Rook, Side::White, 4, 4);
        assert!(grid.put(p));
        assert!(grid.put(piece(PieceKind::Knight, Side::White, 4, 6)));
        assert!(grid.put(piece(PieceKind::Knight, Side::Black, 6, 4)));

        assert!(!p.basic_check(&grid, Position::new(4, 6)));
        assert!(p.basic_check(&grid, Position::new(6, 4)));
        assert!(p.basic_check(&grid, Position::new(0, 0)));
    }

    #[test]
    fn blocked_by_either_side() {
        let mut grid = Grid::new(8, 8);
        let bishop = piece(PieceKind::Bishop, Side::White, 3, 3);
        assert!(grid.put(bishop));
        assert!(!bishop.is_blocked(&grid, Position::new(0, 0)));

        assert!(grid.put(piece(PieceKind::Pawn, Side::White, 1, 1)));
        assert!(bishop.is_blocked(&grid, Position::new(0, 0)));
        // The target square itself never blocks.
        assert!(!bishop.is_blocked(&grid, Position::new(1, 1)));

        assert!(grid.put(piece(PieceKind::Pawn, Side::Black, 3, 5)));
        assert!(bishop.is_blocked(&grid, Position::new(3, 7)));
        assert!(!bishop.is_blocked(&grid, Position::new(3, 4)));
    }

    #[test]
    fn adjacent_target_is_never_blocked() {
        let grid = Grid::new(8, 8);
        let king = piece(PieceKind::King, Side::White, 0, 0);
        assert!(!king.is_blocked(&grid, Position::new(1, 1)));
    }

    #[test]
    fn display() {
        let p = piece(PieceKind::Elephant, Side::Black, 5, 7);
        assert_eq!(p.to_string(), "Black Elephant at (5, 7)");
    }
}
