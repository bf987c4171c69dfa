//! Sliding pieces: rook, bishop, and queen.

use super::{ray_squares, MoveRule};
use crate::{Grid, Piece, Position};
use std::collections::HashSet;

const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Any distance along a rank or a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rook;

impl MoveRule for Rook {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let (rank_delta, file_delta) = piece.position.delta_to(target);
        (rank_delta == 0 || file_delta == 0) && !piece.is_blocked(grid, target)
    }

    fn candidates(&self, piece: &Piece, grid: &Grid) -> Vec<Position> {
        ray_squares(grid, piece.position, &ORTHOGONAL)
    }
}

/// Any distance along a diagonal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bishop;

impl MoveRule for Bishop {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        if !piece.basic_check(grid, target) {
            return false;
        }
        let (rank_delta, file_delta) = piece.position.delta_to(target);
        rank_delta.abs() == file_delta.abs() && !piece.is_blocked(grid, target)
    }

    fn candidates(&self, piece: &Piece, grid: &Grid) -> Vec<Position> {
        ray_squares(grid, piece.position, &DIAGONAL)
    }
}

/// Moves as a rook or as a bishop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Queen;

impl MoveRule for Queen {
    fn is_valid_move(&self, piece: &Piece, grid: &Grid, target: Position) -> bool {
        Rook.is_valid_move(piece, grid, target) || Bishop.is_valid_move(piece, grid, target)
    }

    fn candidates(&self, piece: &Piece, grid: &Grid) -> Vec<Position> {
        let mut squares = Rook.candidates(piece, grid);
        squares.extend(Bishop.candidates(piece, grid));
        squares
    }

    fn possible_moves(&self, piece: &Piece, grid: &Grid) -> HashSet<Position> {
        let mut moves = Rook.possible_moves(piece, grid);
        moves.extend(Bishop.possible_moves(piece, grid));
        moves
    }
}
