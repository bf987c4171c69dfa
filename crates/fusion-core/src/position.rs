//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (rank, file) coordinate on the board.
///
/// Rank 0 is White's home row and file 0 is the left-most column. Both
/// components are signed so candidate squares that fall off the board can
/// still be represented; the [`Grid`](crate::Grid) rejects them on lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    rank: i32,
    file: i32,
}

impl Position {
    /// Creates a position from rank and file.
    #[inline]
    pub const fn new(rank: i32, file: i32) -> Self {
        Position { rank, file }
    }

    /// Returns the rank (row).
    #[inline]
    pub const fn rank(self) -> i32 {
        self.rank
    }

    /// Returns the file (column).
    #[inline]
    pub const fn file(self) -> i32 {
        self.file
    }

    /// Returns the position shifted by the given rank and file deltas.
    #[inline]
    pub const fn offset(self, rank_delta: i32, file_delta: i32) -> Self {
        Position::new(self.rank + rank_delta, self.file + file_delta)
    }

    /// Returns the (rank, file) delta from `self` to `target`.
    #[inline]
    pub const fn delta_to(self, target: Position) -> (i32, i32) {
        (target.rank - self.rank, target.file - self.file)
    }
}

impl From<(i32, i32)> for Position {
    fn from((rank, file): (i32, i32)) -> Self {
        Position::new(rank, file)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.rank, self.file)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}
