//! Board storage, move execution and undo.

use fusion_core::{Grid, Piece, PieceKind, Position, Side};
use std::fmt;
use tracing::{debug, trace};

/// The playing board: a grid of pieces, the location of each side's king,
/// and the history of earlier grids for undo.
///
/// Every operation that can be refused by the rules reports it with a
/// `false` return and leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    /// King squares, indexed by [`Side::index`]. Updated together with the grid.
    kings: [Option<Position>; 2],
    /// One snapshot per committed move, most recent last.
    history: Vec<Grid>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::SIZE, Self::SIZE)
    }
}

impl Board {
    /// Height and width of the regular board.
    pub const SIZE: usize = 8;

    /// Creates an empty board.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            grid: Grid::new(height, width),
            kings: [None, None],
            history: Vec::new(),
        }
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Places a piece on its own position.
    ///
    /// Fails if the position is off the board or already occupied. Placing
    /// a king makes it the tracked king of its side.
    pub fn place(&mut self, piece: Piece) -> bool {
        if !self.grid.put(piece) {
            return false;
        }
        if piece.kind == PieceKind::King {
            self.kings[piece.owner.index()] = Some(piece.position);
        }
        true
    }

    /// Returns the piece at the position, if any. Off-board positions hold nothing.
    pub fn get(&self, position: Position) -> Option<&Piece> {
        self.grid.get(position)
    }

    /// Removes the piece at the position. Fails if off the board or empty.
    pub fn remove(&mut self, position: Position) -> bool {
        match self.grid.take(position) {
            Some(piece) => {
                self.forget_king(&piece);
                true
            }
            None => false,
        }
    }

    /// Moves the piece standing on `from` to `target`.
    ///
    /// The move is refused if it breaks the piece's movement rule or leaves
    /// its own king in check. An accepted move captures any enemy on
    /// `target`, marks the piece as moved, and pushes the previous grid
    /// onto the undo history.
    pub fn move_piece(&mut self, from: Position, target: Position) -> bool {
        let Some(&piece) = self.grid.get(from) else {
            trace!(%from, "no piece to move");
            return false;
        };
        if !piece.is_valid_move(&self.grid, target) {
            trace!(%piece, %target, "move breaks piece rule");
            return false;
        }
        if self.would_cause_own_check(from, target) {
            trace!(%piece, %target, "move leaves own king in check");
            return false;
        }

        self.history.push(self.grid.clone());
        let captured = self.grid.relocate(from, target);
        self.grid.mark_moved(target);

        if let Some(captured) = &captured {
            self.forget_king(captured);
        }
        if piece.kind == PieceKind::King {
            self.kings[piece.owner.index()] = Some(target);
        }

        debug!(
            %piece,
            %target,
            captured = ?captured.map(|c| c.kind),
            ply = self.history.len(),
            "move committed"
        );
        true
    }

    /// Restores the grid from before the most recent committed move.
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.grid = previous;
        self.refresh_kings();
        debug!(ply = self.history.len(), "move undone");
        true
    }

    /// Number of committed moves that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Removes every piece and clears the undo history.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.kings = [None, None];
        self.history.clear();
        debug!("board reset");
    }

    /// Returns all pieces owned by `side`, rank by rank then file by file.
    pub fn player_pieces(&self, side: Side) -> Vec<Piece> {
        self.grid.pieces_of(side).copied().collect()
    }

    /// Returns the tracked king of `side`, if it is on the board.
    pub fn king(&self, side: Side) -> Option<&Piece> {
        self.kings[side.index()].and_then(|position| self.grid.get(position))
    }

    pub(crate) fn king_position(&self, side: Side) -> Option<Position> {
        self.kings[side.index()]
    }

    fn forget_king(&mut self, piece: &Piece) {
        let slot = &mut self.kings[piece.owner.index()];
        if piece.kind == PieceKind::King && *slot == Some(piece.position) {
            *slot = None;
        }
    }

    fn refresh_kings(&mut self) {
        for side in Side::BOTH {
            self.kings[side.index()] = self.grid.find_king(side).map(|king| king.position);
        }
    }
}

impl fmt::Display for Board {
    /// Draws the board with the highest rank on top. White pieces are
    /// upper-case, Black pieces lower-case.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.height()).rev() {
            write!(f, "{rank} ")?;
            for file in 0..self.width() {
                let symbol = match self.get(Position::new(rank, file)) {
                    Some(piece) if piece.owner == Side::White => piece.name(),
                    Some(piece) => piece.name().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..self.width() {
            write!(f, "{}", file % 10)?;
        }
        writeln!(f)
    }
}
