use super::MoveRule;
use crate::{Grid, Piece, Position, Side};

/// The xiangqi soldier.
///
/// Steps one square forward. Once it has crossed the midline of the board
/// it may also step one square left or right. It captures on any square it
/// may step to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Soldier;

impl Soldier {
    /// White has crossed once on the upper half, Black once on the lower half.
    fn has_crossed(piece: &Piece, grid: &Grid) -> bool {
        match piece.owner {
            Side::White => piece.position.rank() >= grid.midline(),
            Side::Black => piece.position.rank() < grid.midline(),
        }
    }
}

impl MoveRule for Soldier {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let (rank_delta, file_delta) = piece.position.delta_to(target);
        match (rank_delta * piece.owner.forward(), file_delta.abs()) {
            (1, 0) => true,
            (0, 1) => Self::has_crossed(piece, grid),
            _ => false,
        }
    }

    fn candidates(&self, piece: &Piece, grid: &Grid) -> Vec<Position> {
        let from = piece.position;
        let mut squares = vec![from.offset(piece.owner.forward(), 0)];
        if Self::has_crossed(piece, grid) {
            squares.push(from.offset(0, -1));
            squares.push(from.offset(0, 1));
        }
        squares
    }
}
