//! Configuration file loading for self-play.
//!
//! Settings come from a TOML file, `fusion.toml` in the current directory
//! by default. A missing file means default settings. The optional
//! `[board]` table describes a custom starting position:
//!
//! ```toml
//! seed = 42
//! max_plies = 120
//!
//! [board]
//! height = 8
//! width = 8
//!
//! [[board.pieces]]
//! rank = 0
//! file = 4
//! kind = "king"
//! side = "white"
//! ```

use fusion_core::{PieceKind, Position, Side};
use fusion_engine::{Board, Game, Placement, SetupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration or building the game
/// it describes.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured pieces do not form a playable board.
    #[error("Invalid board: {0}")]
    SetupError(#[from] SetupError),
}

/// One configured starting piece.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PieceConfig {
    #[serde(flatten)]
    pub position: Position,
    pub kind: PieceKind,
    pub side: Side,
}

impl From<PieceConfig> for Placement {
    fn from(piece: PieceConfig) -> Self {
        Placement {
            position: piece.position,
            kind: piece.kind,
            side: piece.side,
        }
    }
}

/// A custom board: its size and the pieces on it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    #[serde(default = "default_size")]
    pub height: usize,
    #[serde(default = "default_size")]
    pub width: usize,
    #[serde(default)]
    pub pieces: Vec<PieceConfig>,
}

fn default_size() -> usize {
    Board::SIZE
}

/// Self-play settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Random seed. A fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop after this many plies without a result. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    /// Print the board after every move. Defaults to true.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    /// Custom starting position. The standard layout is used when absent.
    #[serde(default)]
    pub board: Option<BoardConfig>,
}

fn default_max_plies() -> usize {
    200
}

fn default_show_board() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            seed: None,
            max_plies: default_max_plies(),
            show_board: default_show_board(),
            board: None,
        }
    }
}

impl PlayConfig {
    /// Returns the default configuration file path, `fusion.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("fusion.toml")
    }

    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Builds the game to play: the configured board with White to move, or
    /// a standard game.
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        match &self.board {
            Some(board) => {
                let placements = board.pieces.iter().copied().map(Placement::from);
                let board = Board::from_placements(board.height, board.width, placements)?;
                Ok(Game::from_board(board, Side::White))
            }
            None => Ok(Game::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayConfig::load(&dir.path().join("fusion.toml")).unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(config.max_plies, 200);
        assert!(config.show_board);
    }

    #[test]
    fn parses_custom_board() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
seed = 7
show_board = false

[board]
[[board.pieces]]
rank = 0
file = 4
kind = "king"
side = "white"

[[board.pieces]]
rank = 7
file = 4
kind = "king"
side = "black"

[[board.pieces]]
rank = 3
file = 3
kind = "soldier"
side = "black"
"#
        )
        .unwrap();

        let config = PlayConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(!config.show_board);
        assert_eq!(config.max_plies, 200);

        let board = config.board.as_ref().unwrap();
        assert_eq!((board.height, board.width), (8, 8));
        assert_eq!(board.pieces.len(), 3);
        assert_eq!(board.pieces[2].position, Position::new(3, 3));
        assert_eq!(board.pieces[2].kind, PieceKind::Soldier);

        let game = config.build_game().unwrap();
        assert_eq!(game.board().player_pieces(Side::Black).len(), 2);
    }

    #[test]
    fn rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "max_plies = \"many\"").unwrap();
        assert!(matches!(
            PlayConfig::load(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn board_without_kings_is_rejected() {
        let config = PlayConfig {
            board: Some(BoardConfig {
                height: 8,
                width: 8,
                pieces: vec![PieceConfig {
                    position: Position::new(0, 0),
                    kind: PieceKind::Rook,
                    side: Side::White,
                }],
            }),
            ..PlayConfig::default()
        };
        assert!(matches!(
            config.build_game(),
            Err(ConfigError::SetupError(SetupError::KingCount { .. }))
        ));
    }

    #[test]
    fn oversized_board_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[board]
height = 8589934592
width = 8589934592
"#
        )
        .unwrap();

        let config = PlayConfig::load(file.path()).unwrap();
        assert!(matches!(
            config.build_game(),
            Err(ConfigError::SetupError(SetupError::InvalidSize {
                height: 8589934592,
                width: 8589934592
            }))
        ));
    }

    #[test]
    fn standard_game_without_board() {
        let game = PlayConfig::default().build_game().unwrap();
        assert_eq!(game.board(), &Board::standard());
    }
}
