use super::MoveRule;
use crate::{Grid, Piece, Position};

/// The chess pawn, without en passant or promotion.
///
/// Advances one square onto an empty square, or two on its first move when
/// both squares are empty. Captures one square diagonally forward, and only
/// onto an enemy piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pawn;

impl MoveRule for Pawn {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let dir = piece.owner.forward();
        let (rank_delta, file_delta) = piece.position.delta_to(target);

        match (rank_delta * dir, file_delta.abs()) {
            (1, 0) => !grid.is_occupied(target),
            // basic_check already ruled out our own pieces
            (1, 1) => grid.is_occupied(target),
            (2, 0) => {
                !piece.has_moved
                    && !grid.is_occupied(target)
                    && !grid.is_occupied(target.offset(-dir, 0))
            }
            _ => false,
        }
    }

    fn candidates(&self, piece: &Piece, _grid: &Grid) -> Vec<Position> {
        let dir = piece.owner.forward();
        let from = piece.position;
        vec![
            from.offset(dir, 0),
            from.offset(2 * dir, 0),
            from.offset(dir, -1),
            from.offset(dir, 1),
        ]
    }
}
