use super::Player;
use crate::error::GameError;

/// Game-ended value reported for a draw. Kept distinct from `0.0`, which
/// means the game is still going.
pub const DRAW_VALUE: f32 = 1e-4;

/// Result of inspecting a board for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Numeric game-ended value from `player`'s point of view: `1.0` for a
    /// win, `-1.0` for a loss, [`DRAW_VALUE`] for a draw and `0.0` while the
    /// game is ongoing.
    pub fn value_for(self, player: Player) -> f32 {
        match self {
            Outcome::Ongoing => 0.0,
            Outcome::Draw => DRAW_VALUE,
            Outcome::Win(winner) if winner == player => 1.0,
            Outcome::Win(_) => -1.0,
        }
    }

    /// Decode a game-ended value reported from `player`'s point of view.
    pub fn from_value(value: f32, player: Player) -> Result<Outcome, GameError> {
        if value == 0.0 {
            Ok(Outcome::Ongoing)
        } else if value == 1.0 {
            Ok(Outcome::Win(player))
        } else if value == -1.0 {
            Ok(Outcome::Win(player.other()))
        } else if value == DRAW_VALUE {
            Ok(Outcome::Draw)
        } else {
            Err(GameError::InconsistentWinState { value })
        }
    }
}
