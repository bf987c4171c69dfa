//! Piece kind representation.

use crate::rules::{self, MoveRule};
use serde::{Deserialize, Serialize};

/// The eight kinds of pieces: the six chess pieces plus the Soldier and
/// the Elephant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Soldier,
    Elephant,
}

impl PieceKind {
    /// Returns the single-letter display symbol.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
            PieceKind::Soldier => 'S',
            PieceKind::Elephant => 'E',
        }
    }

    /// Returns the movement rule for this kind.
    pub fn rule(self) -> &'static dyn MoveRule {
        match self {
            PieceKind::King => &rules::King,
            PieceKind::Queen => &rules::Queen,
            PieceKind::Rook => &rules::Rook,
            PieceKind::Bishop => &rules::Bishop,
            PieceKind::Knight => &rules::Knight,
            PieceKind::Pawn => &rules::Pawn,
            PieceKind::Soldier => &rules::Soldier,
            PieceKind::Elephant => &rules::Elephant,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
            PieceKind::Soldier => "Soldier",
            PieceKind::Elephant => "Elephant",
        };
        write!(f, "{}", name)
    }
}
