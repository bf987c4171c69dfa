//! Game session management.
//!
//! The [`Game`] struct wraps a [`Board`] with the state a match needs on top
//! of the rules:
//! - Whose turn it is
//! - The result once the game has ended
//! - A running tally of finished games across restarts

use crate::Board;
use fusion_core::{Position, Side};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::info;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The loser was checkmated.
    Checkmate { winner: Side },
    /// The loser gave up.
    Forfeit { winner: Side },
    /// The side to move had no legal move and was not in check.
    Stalemate,
}

impl GameResult {
    /// Returns the winning side, or `None` for a draw.
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Forfeit { winner } => Some(winner),
            GameResult::Stalemate => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{} wins by checkmate", winner),
            GameResult::Forfeit { winner } => write!(f, "{} wins by forfeit", winner),
            GameResult::Stalemate => write!(f, "draw by stalemate"),
        }
    }
}

/// State of the game after a move, seen from the side now to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a way out.
    Check,
    Over(GameResult),
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game has already ended")]
    GameAlreadyOver,

    #[error("no piece at {0}")]
    NoPieceAt(Position),

    #[error("piece at {at} belongs to {owner}, but it is {to_move}'s turn")]
    NotYourPiece {
        at: Position,
        owner: Side,
        to_move: Side,
    },

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("no move to undo")]
    NothingToUndo,
}

/// Win, loss and tie tally over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub white_wins: u32,
    pub black_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    /// Adds a finished game to the tally.
    pub fn record(&mut self, result: GameResult) {
        match result.winner() {
            Some(Side::White) => self.white_wins += 1,
            Some(Side::Black) => self.black_wins += 1,
            None => self.ties += 1,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "White {} - Black {} ({} tied)",
            self.white_wins, self.black_wins, self.ties
        )
    }
}

/// A game with turn order and result tracking.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Board and side to move the game started from, restored by `restart`.
    start: Board,
    start_side: Side,
    side_to_move: Side,
    result: Option<GameResult>,
    scoreboard: Scoreboard,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game on the standard board with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::White)
    }

    /// Creates a game from a prepared board.
    ///
    /// The board must hold exactly one king per side. If `side_to_move` is
    /// already mated or stalemated, the game starts out finished.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut game = Game {
            start: board.clone(),
            start_side: side_to_move,
            board,
            side_to_move,
            result: None,
            scoreboard: Scoreboard::default(),
        };
        game.evaluate();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the result if the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.in_check(self.side_to_move)
    }

    /// Number of moves played that can still be undone.
    pub fn ply_count(&self) -> usize {
        self.board.history_len()
    }

    /// Returns the legal targets of the piece on `from`.
    ///
    /// Empty if the square is empty or holds a piece of the side not to move.
    pub fn legal_moves(&self, from: Position) -> HashSet<Position> {
        match self.board.get(from) {
            Some(piece) if piece.owner == self.side_to_move => self.board.legal_moves(from),
            _ => HashSet::new(),
        }
    }

    /// Every (from, to) pair the side to move may play, in row-major order of
    /// the moving pieces.
    pub fn all_legal_moves(&self) -> Vec<(Position, Position)> {
        let mut moves = Vec::new();
        for piece in self.board.player_pieces(self.side_to_move) {
            let mut targets: Vec<_> = self.board.legal_moves(piece.position).into_iter().collect();
            targets.sort();
            moves.extend(targets.into_iter().map(|to| (piece.position, to)));
        }
        moves
    }

    /// Moves the piece on `from` to `to` for the side to move, then hands the
    /// turn over and reports the opponent's situation.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<GameStatus, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let piece = *self.board.get(from).ok_or(GameError::NoPieceAt(from))?;
        if piece.owner != self.side_to_move {
            return Err(GameError::NotYourPiece {
                at: from,
                owner: piece.owner,
                to_move: self.side_to_move,
            });
        }
        if !self.board.move_piece(from, to) {
            return Err(GameError::IllegalMove { from, to });
        }

        self.side_to_move = self.side_to_move.opposite();
        Ok(self.evaluate())
    }

    /// Takes back the last move and gives the turn back.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.board.undo_move() {
            return Err(GameError::NothingToUndo);
        }
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Ends the game with `side` giving up.
    pub fn forfeit(&mut self, side: Side) -> Result<GameResult, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let result = GameResult::Forfeit {
            winner: side.opposite(),
        };
        self.finish(result);
        Ok(result)
    }

    /// Starts over from the board and side to move the game was created
    /// with. The scoreboard carries over.
    pub fn restart(&mut self) {
        self.board = self.start.clone();
        self.side_to_move = self.start_side;
        self.result = None;
        self.evaluate();
    }

    /// Checks the side to move for mate, stalemate or check.
    fn evaluate(&mut self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.board.in_check(side);
        if self.board.no_legal_moves(side) {
            let result = if in_check {
                GameResult::Checkmate {
                    winner: side.opposite(),
                }
            } else {
                GameResult::Stalemate
            };
            self.finish(result);
            return GameStatus::Over(result);
        }
        if in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        self.scoreboard.record(result);
        info!(%result, plies = self.board.history_len(), "game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_core::{Piece, PieceKind};

    fn pos(rank: i32, file: i32) -> Position {
        Position::new(rank, file)
    }

    fn board_with(pieces: &[(PieceKind, Side, i32, i32)]) -> Board {
        let mut board = Board::default();
        for &(kind, side, rank, file) in pieces {
            assert!(board.place(Piece::new(kind, side, pos(rank, file))));
        }
        board
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.ply_count(), 0);
        assert!(!game.is_game_over());
        assert!(!game.is_check());
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.make_move(pos(1, 4), pos(3, 4)), Ok(GameStatus::Ongoing));
        assert_eq!(game.side_to_move(), Side::Black);

        let err = game.make_move(pos(3, 4), pos(4, 4));
        assert_eq!(
            err,
            Err(GameError::NotYourPiece {
                at: pos(3, 4),
                owner: Side::White,
                to_move: Side::Black,
            })
        );

        assert_eq!(game.make_move(pos(6, 4), pos(4, 4)), Ok(GameStatus::Ongoing));
        assert_eq!(game.ply_count(), 2);
    }

    #[test]
    fn illegal_and_empty_moves() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(pos(1, 4), pos(4, 4)),
            Err(GameError::IllegalMove {
                from: pos(1, 4),
                to: pos(4, 4)
            })
        );
        assert_eq!(
            game.make_move(pos(3, 3), pos(4, 3)),
            Err(GameError::NoPieceAt(pos(3, 3)))
        );
        assert_eq!(game.side_to_move(), Side::White);
    }

    #[test]
    fn legal_moves_only_for_side_to_move() {
        let game = Game::new();
        assert_eq!(game.legal_moves(pos(1, 4)).len(), 2);
        assert!(game.legal_moves(pos(6, 4)).is_empty());
    }

    #[test]
    fn all_legal_moves_from_start() {
        let game = Game::new();
        let moves = game.all_legal_moves();
        // Six pawns with two pushes each; the soldier and the elephant
        // stand in front of the a- and h-pawns and take one knight jump
        // each away.
        assert!(moves.contains(&(pos(2, 0), pos(3, 0))));
        assert!(moves.contains(&(pos(2, 7), pos(4, 5))));
        assert!(!moves.iter().any(|&(from, _)| from == pos(1, 0)));
        assert!(!moves.iter().any(|&(from, _)| from == pos(1, 7)));
        assert_eq!(moves.len(), 6 * 2 + 2 + 1 + 1);
        assert_eq!(moves[0], (pos(0, 1), pos(2, 2)));
    }

    #[test]
    fn undo_gives_turn_back() {
        let mut game = Game::new();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));

        game.make_move(pos(1, 3), pos(2, 3)).unwrap();
        game.undo().unwrap();
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn checkmate_ends_game() {
        let board = board_with(&[
            (PieceKind::King, Side::White, 0, 7),
            (PieceKind::Rook, Side::White, 1, 0),
            (PieceKind::Rook, Side::White, 5, 1),
            (PieceKind::King, Side::Black, 7, 4),
        ]);
        let mut game = Game::from_board(board, Side::White);
        let status = game.make_move(pos(5, 1), pos(6, 1)).unwrap();
        assert_eq!(status, GameStatus::Ongoing);
        let status = game.make_move(pos(7, 4), pos(7, 3)).unwrap();
        assert_eq!(status, GameStatus::Ongoing);

        let status = game.make_move(pos(1, 0), pos(7, 0)).unwrap();
        let expected = GameResult::Checkmate {
            winner: Side::White,
        };
        assert_eq!(status, GameStatus::Over(expected));
        assert_eq!(game.result(), Some(expected));
        assert_eq!(game.scoreboard().white_wins, 1);

        assert_eq!(
            game.make_move(pos(7, 3), pos(7, 2)),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game.undo(), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn check_is_reported() {
        let board = board_with(&[
            (PieceKind::King, Side::White, 0, 0),
            (PieceKind::Rook, Side::White, 1, 7),
            (PieceKind::King, Side::Black, 7, 4),
        ]);
        let mut game = Game::from_board(board, Side::White);
        assert_eq!(game.make_move(pos(1, 7), pos(7, 7)), Ok(GameStatus::Check));
        assert!(game.is_check());
    }

    #[test]
    fn stalemate_ends_game_as_draw() {
        let board = board_with(&[
            (PieceKind::King, Side::White, 7, 7),
            (PieceKind::Rook, Side::White, 2, 1),
            (PieceKind::Rook, Side::White, 5, 2),
            (PieceKind::King, Side::Black, 0, 0),
        ]);
        let mut game = Game::from_board(board, Side::White);
        let status = game.make_move(pos(5, 2), pos(1, 2)).unwrap();
        assert_eq!(status, GameStatus::Over(GameResult::Stalemate));
        assert_eq!(game.scoreboard().ties, 1);
    }

    #[test]
    fn finished_position_is_detected_on_creation() {
        let board = board_with(&[
            (PieceKind::Queen, Side::White, 2, 2),
            (PieceKind::Rook, Side::White, 2, 0),
            (PieceKind::Rook, Side::White, 0, 2),
            (PieceKind::King, Side::White, 7, 7),
            (PieceKind::King, Side::Black, 0, 0),
        ]);
        let game = Game::from_board(board, Side::Black);
        assert_eq!(
            game.result(),
            Some(GameResult::Checkmate {
                winner: Side::White
            })
        );
    }

    #[test]
    fn forfeit_and_restart() {
        let mut game = Game::new();
        game.make_move(pos(1, 4), pos(3, 4)).unwrap();
        let result = game.forfeit(Side::Black).unwrap();
        assert_eq!(result.winner(), Some(Side::White));
        assert_eq!(game.forfeit(Side::White), Err(GameError::GameAlreadyOver));

        game.restart();
        assert!(!game.is_game_over());
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.scoreboard().white_wins, 1);

        game.forfeit(Side::White).unwrap();
        assert_eq!(game.scoreboard().to_string(), "White 1 - Black 1 (0 tied)");
    }

    #[test]
    fn restart_returns_to_starting_board() {
        let board = board_with(&[
            (PieceKind::King, Side::White, 0, 0),
            (PieceKind::Rook, Side::White, 1, 7),
            (PieceKind::King, Side::Black, 7, 4),
        ]);
        let start = board.clone();
        let mut game = Game::from_board(board, Side::Black);
        game.make_move(pos(7, 4), pos(6, 4)).unwrap();
        game.make_move(pos(1, 7), pos(6, 7)).unwrap();
        game.forfeit(Side::Black).unwrap();

        game.restart();
        assert_eq!(game.board(), &start);
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(!game.is_game_over());
        assert_eq!(game.scoreboard().white_wins, 1);
    }

    #[test]
    fn result_display() {
        assert_eq!(
            GameResult::Checkmate {
                winner: Side::Black
            }
            .to_string(),
            "Black wins by checkmate"
        );
        assert_eq!(GameResult::Stalemate.to_string(), "draw by stalemate");
        assert_eq!(
            GameError::IllegalMove {
                from: pos(1, 1),
                to: pos(4, 1)
            }
            .to_string(),
            "illegal move: (1, 1) -> (4, 1)"
        );
    }
}
