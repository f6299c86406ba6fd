use std::fmt;

use super::moves::MAX_COLS;
use super::{Board, Outcome, Player, ValidMoves};
use crate::error::{ConfigError, GameError};

/// Rules of a two-player, zero-sum, column-drop game.
///
/// Positions are values: `apply_move` returns a fresh position and never
/// touches the one it was given, so searches can branch freely from a shared
/// ancestor.
pub trait Game {
    type Position: Clone + fmt::Debug;

    /// `(height, width)` of the grid.
    fn board_size(&self) -> (usize, usize);

    /// Number of distinct moves, i.e. the length of a policy vector.
    fn action_size(&self) -> usize;

    fn initial(&self) -> Self::Position;

    fn valid_moves(&self, position: &Self::Position) -> ValidMoves;

    /// Place `player`'s piece in `column`, returning the new position.
    fn apply_move(
        &self,
        position: &Self::Position,
        player: Player,
        column: usize,
    ) -> Result<Self::Position, GameError>;

    fn win_state(&self, position: &Self::Position) -> Outcome;

    /// Game-ended value from `player`'s perspective, see [`Outcome::value_for`].
    fn game_ended(&self, position: &Self::Position, player: Player) -> f32 {
        self.win_state(position).value_for(player)
    }

    /// Re-express `position` so that `player` is represented by `+1`.
    fn canonicalize(&self, position: &Self::Position, player: Player) -> Self::Position;

    /// Equivalent `(position, policy)` pairs, the identity first.
    fn symmetries(&self, position: &Self::Position, policy: &[f32])
        -> Vec<(Self::Position, Vec<f32>)>;

    /// Textual key, distinct for distinct positions.
    fn string_representation(&self, position: &Self::Position) -> String;
}

/// Grid dimensions and run length of a Connect Four variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: 6,
            width: 7,
            win_length: 4,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.width == 0 || self.width > MAX_COLS {
            return Err(ConfigError::Validation(format!(
                "board.width must be in [1, {MAX_COLS}]"
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be >= 1".into(),
            ));
        }
        if self.win_length > self.height.max(self.width) {
            return Err(ConfigError::Validation(
                "board.win_length must fit along the height or the width".into(),
            ));
        }
        Ok(())
    }
}

/// Connect Four on a configurable grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    config: BoardConfig,
}

impl ConnectFour {
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(ConnectFour { config })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

impl Game for ConnectFour {
    type Position = Board;

    fn board_size(&self) -> (usize, usize) {
        (self.config.height, self.config.width)
    }

    fn action_size(&self) -> usize {
        self.config.width
    }

    fn initial(&self) -> Board {
        Board::new(self.config.height, self.config.width, self.config.win_length)
    }

    fn valid_moves(&self, position: &Board) -> ValidMoves {
        position.valid_moves()
    }

    fn apply_move(&self, position: &Board, player: Player, column: usize) -> Result<Board, GameError> {
        position.with_move(player, column)
    }

    fn win_state(&self, position: &Board) -> Outcome {
        position.win_state()
    }

    fn canonicalize(&self, position: &Board, player: Player) -> Board {
        position.canonical(player)
    }

    fn symmetries(&self, position: &Board, policy: &[f32]) -> Vec<(Board, Vec<f32>)> {
        let mirrored_policy = policy.iter().rev().copied().collect();
        vec![
            (position.clone(), policy.to_vec()),
            (position.mirrored(), mirrored_policy),
        ]
    }

    fn string_representation(&self, position: &Board) -> String {
        position.to_string()
    }
}
