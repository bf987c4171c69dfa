//! The grid of board cells.

use crate::{Piece, PieceKind, Position, Side};

/// A `height × width` grid where each cell holds at most one piece.
///
/// Cells are stored row-major (rank by rank, file by file within a rank).
/// The grid keeps each piece's `position` in step with the cell it occupies.
/// Cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: i32,
    width: i32,
    cells: Vec<Option<Piece>>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// `height * width` must fit in an `i32`; callers taking sizes from
    /// outside validate them first.
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            height: height as i32,
            width: width as i32,
            cells: vec![None; height * width],
        }
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// The first rank of the upper half of the board.
    #[inline]
    pub const fn midline(&self) -> i32 {
        self.height / 2
    }

    /// Returns true if the position lies on the grid.
    #[inline]
    pub const fn contains(&self, position: Position) -> bool {
        position.rank() >= 0
            && position.rank() < self.height
            && position.file() >= 0
            && position.file() < self.width
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some((position.rank() * self.width + position.file()) as usize)
        } else {
            None
        }
    }

    /// Returns the piece at the position, or `None` if the cell is empty or
    /// off the grid.
    pub fn get(&self, position: Position) -> Option<&Piece> {
        self.index(position).and_then(|i| self.cells[i].as_ref())
    }

    /// Returns true if the position is on the grid and holds a piece.
    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Stores the piece at its own position.
    ///
    /// Returns false, leaving the grid untouched, if that position is off
    /// the grid or already occupied.
    pub fn put(&mut self, piece: Piece) -> bool {
        match self.index(piece.position) {
            Some(i) if self.cells[i].is_none() => {
                self.cells[i] = Some(piece);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the piece at the position.
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        let i = self.index(position)?;
        self.cells[i].take()
    }

    /// Moves the piece at `from` to `to`, removing whatever stood on `to`.
    ///
    /// No movement rule is consulted. Returns the removed occupant of `to`.
    /// Does nothing if `from` is empty or `to` is off the grid.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        if !self.contains(to) || from == to {
            return None;
        }
        let mut piece = self.take(from)?;
        let captured = self.take(to);
        piece.position = to;
        self.put(piece);
        captured
    }

    /// Returns a mutable reference to the piece at the position.
    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Piece> {
        let i = self.index(position)?;
        self.cells[i].as_mut()
    }

    /// Marks the piece at the position as having moved.
    pub fn mark_moved(&mut self, position: Position) {
        if let Some(piece) = self.get_mut(position) {
            piece.has_moved = true;
        }
    }

    /// Iterates over all pieces, rank by rank then file by file.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    /// Iterates over the pieces owned by `side`, in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.owner == side)
    }

    /// Finds the first king owned by `side` in row-major order.
    pub fn find_king(&self, side: Side) -> Option<&Piece> {
        self.pieces_of(side).find(|p| p.kind == PieceKind::King)
    }

    /// Returns true if no cell holds a piece.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }
}
