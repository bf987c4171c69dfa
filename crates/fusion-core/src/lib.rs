//! Core types for fusion chess.
//!
//! Fusion chess is played on an 8×8 board with the six chess pieces plus two
//! pieces borrowed from xiangqi, the Soldier and the Elephant. This crate
//! provides the building blocks the engine composes:
//! - [`Side`] for the two players
//! - [`Position`] for (rank, file) coordinates
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Grid`] for cell storage
//! - [`rules`] for the per-kind movement rules
//!
//! Movement rules here only know about piece shape and blocking. King
//! safety lives in the engine.

mod grid;
mod kind;
mod piece;
mod position;
pub mod rules;
mod side;

pub use grid::Grid;
pub use kind::PieceKind;
pub use piece::Piece;
pub use position::Position;
pub use rules::MoveRule;
pub use side::Side;
