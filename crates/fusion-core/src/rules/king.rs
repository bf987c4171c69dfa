use super::{offset_squares, MoveRule, NEIGHBOURS};
use crate::{Grid, Piece, Position};

/// One step in any of the eight directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct King;

impl MoveRule for King {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let (rank_delta, file_delta) = piece.position.delta_to(target);
        rank_delta.abs() <= 1 && file_delta.abs() <= 1
    }

    fn candidates(&self, piece: &Piece, _grid: &Grid) -> Vec<Position> {
        offset_squares(piece.position, &NEIGHBOURS)
    }
}
