use super::{offset_squares, MoveRule};
use crate::{Grid, Piece, Position};

const LEAPS: [(i32, i32); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// The xiangqi elephant: exactly two squares diagonally.
///
/// The move is blocked when the square it passes over is occupied.
/// Unlike in xiangqi, the elephant may cross the midline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elephant;

impl MoveRule for Elephant {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let (rank_delta, file_delta) = piece.position.delta_to(target);
        rank_delta.abs() == 2 && file_delta.abs() == 2 && !piece.is_blocked(grid, target)
    }

    fn candidates(&self, piece: &Piece, _grid: &Grid) -> Vec<Position> {
        offset_squares(piece.position, &LEAPS)
    }
}
