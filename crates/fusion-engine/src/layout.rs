//! Starting layouts.

use crate::Board;
use fusion_core::{Piece, PieceKind, Position, Side};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when building a board from placements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("placement at {0} is off the board")]
    OutOfBounds(Position),

    #[error("square {0} is already occupied")]
    Occupied(Position),

    #[error("{side} must have exactly one king, found {count}")]
    KingCount { side: Side, count: usize },

    #[error("invalid board size {height}×{width}")]
    InvalidSize { height: usize, width: usize },
}

/// One starting piece: where it stands, what it is, and who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub position: Position,
    pub kind: PieceKind,
    pub side: Side,
}

impl Placement {
    pub const fn new(rank: i32, file: i32, kind: PieceKind, side: Side) -> Self {
        Placement {
            position: Position::new(rank, file),
            kind,
            side,
        }
    }

    /// Creates the unmoved piece this placement describes.
    pub const fn piece(&self) -> Piece {
        Piece::new(self.kind, self.side, self.position)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard fusion chess layout on an 8×8 board.
///
/// The usual chess back ranks and pawns, plus for each side a Soldier in
/// front of the queen-side rook's pawn and an Elephant in front of the
/// king-side rook's pawn.
pub fn standard_layout() -> Vec<Placement> {
    let mut layout = Vec::with_capacity(36);
    for (side, back, pawns, extras) in [(Side::White, 0, 1, 2), (Side::Black, 7, 6, 5)] {
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            layout.push(Placement::new(back, file as i32, kind, side));
        }
        for file in 0..8 {
            layout.push(Placement::new(pawns, file, PieceKind::Pawn, side));
        }
        layout.push(Placement::new(extras, 0, PieceKind::Soldier, side));
        layout.push(Placement::new(extras, 7, PieceKind::Elephant, side));
    }
    layout
}

fn check_size(height: usize, width: usize) -> Result<(), SetupError> {
    let rows = i32::try_from(height).ok().filter(|&h| h > 0);
    let cols = i32::try_from(width).ok().filter(|&w| w > 0);
    match (rows, cols) {
        (Some(rows), Some(cols)) if rows.checked_mul(cols).is_some() => Ok(()),
        _ => Err(SetupError::InvalidSize { height, width }),
    }
}

impl Board {
    /// Builds a board from a sequence of placements.
    ///
    /// Both dimensions must be non-zero and the cell count must fit in an
    /// `i32`. Every placement must land on an empty square of the board, and
    /// each side must end up with exactly one king.
    pub fn from_placements<I>(height: usize, width: usize, placements: I) -> Result<Board, SetupError>
    where
        I: IntoIterator<Item = Placement>,
    {
        check_size(height, width)?;
        let mut board = Board::new(height, width);
        let mut kings = [0usize; 2];
        for placement in placements {
            let position = placement.position;
            if !board.grid().contains(position) {
                return Err(SetupError::OutOfBounds(position));
            }
            if !board.place(placement.piece()) {
                return Err(SetupError::Occupied(position));
            }
            if placement.kind == PieceKind::King {
                kings[placement.side.index()] += 1;
            }
        }
        for side in Side::BOTH {
            let count = kings[side.index()];
            if count != 1 {
                return Err(SetupError::KingCount { side, count });
            }
        }
        debug!(height, width, "board set up");
        Ok(board)
    }

    /// Creates an 8×8 board with the [`standard_layout`].
    pub fn standard() -> Board {
        let mut board = Board::new(Board::SIZE, Board::SIZE);
        for placement in standard_layout() {
            let placed = board.place(placement.piece());
            debug_assert!(placed, "standard layout overlaps at {}", placement.position);
        }
        board
    }
}
