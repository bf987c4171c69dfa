//! Rule engine for fusion chess.
//!
//! This crate provides:
//! - [`Board`] - piece storage, move execution and undo
//! - Check, checkmate and stalemate detection on [`Board`]
//! - [`standard_layout`] and [`Board::from_placements`] for setting up games
//! - [`Game`] - turn order, results and a running [`Scoreboard`]
//!
//! # Architecture
//!
//! Movement shape and blocking live with each piece kind in `fusion-core`.
//! The board layers king safety on top: a move is legal when the piece's
//! rule allows it and the mover's king is not attacked afterwards.
//! Rule violations are reported as `false`, never as errors, and leave the
//! board untouched.
//!
//! # Example
//!
//! ```
//! use fusion_engine::{Board, Game, GameStatus};
//! use fusion_core::{Position, Side};
//!
//! let board = Board::standard();
//! let moves = board.legal_moves(Position::new(1, 4));
//! assert_eq!(moves.len(), 2);
//!
//! let mut game = Game::new();
//! let status = game.make_move(Position::new(1, 4), Position::new(3, 4)).unwrap();
//! assert_eq!(status, GameStatus::Ongoing);
//! assert_eq!(game.side_to_move(), Side::Black);
//! ```

mod board;
mod check;
mod game;
mod layout;

pub use board::Board;
pub use game::{Game, GameError, GameResult, GameStatus, Scoreboard};
pub use layout::{standard_layout, Placement, SetupError};
