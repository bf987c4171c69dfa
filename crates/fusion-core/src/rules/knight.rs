use super::{offset_squares, MoveRule};
use crate::{Grid, Piece, Position};

const JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// The L-shaped jump; never blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Knight;

impl MoveRule for Knight {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let (rank_delta, file_delta) = piece.position.delta_to(target);
        (rank_delta * file_delta).abs() == 2
    }

    fn candidates(&self, piece: &Piece, _grid: &Grid) -> Vec<Position> {
        offset_squares(piece.position, &JUMPS)
    }
}
