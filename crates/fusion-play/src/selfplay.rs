//! Random self-play.

use fusion_core::{Position, Side};
use fusion_engine::{Game, GameError, GameStatus};
use rand::seq::IndexedRandom;
use rand::Rng;

/// A move made during self-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Side,
    pub from: Position,
    pub to: Position,
    pub status: GameStatus,
}

/// Plays uniformly random legal moves until the game ends or `max_plies`
/// moves have been made, calling `on_move` after each one.
///
/// Returns the number of moves played.
pub fn play_random<R, F>(
    game: &mut Game,
    rng: &mut R,
    max_plies: usize,
    mut on_move: F,
) -> Result<usize, GameError>
where
    R: Rng + ?Sized,
    F: FnMut(&Game, PlayedMove),
{
    let mut played = 0;
    while played < max_plies && !game.is_game_over() {
        let moves = game.all_legal_moves();
        // A finished game is always detected first, so this only trips on
        // boards set up without a king.
        let Some(&(from, to)) = moves.choose(rng) else {
            break;
        };
        let side = game.side_to_move();
        let status = game.make_move(from, to)?;
        played += 1;
        on_move(
            game,
            PlayedMove {
                side,
                from,
                to,
                status,
            },
        );
    }
    Ok(played)
}
