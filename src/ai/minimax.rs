use tracing::{debug, trace};

use crate::error::{ConfigError, GameError};
use crate::game::{Board, ConnectFour, Game, Outcome, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Magnitude of a decisive terminal value, far above any heuristic score.
/// Not discounted by depth: a win found at any depth scores the same.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead before falling back to the heuristic.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 4 }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        Ok(())
    }
}

/// Column chosen at a search node together with its minimax value. Leaves
/// carry no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

/// Depth-bounded minimax agent with alpha-beta pruning.
///
/// The position handed to [`Agent::select_move`] is canonical, so the root
/// player is always Red and maximizes; Yellow minimizes.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.depth)
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "search depth must be at least one ply");
        MinimaxAgent { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run a full-width alpha-beta search from `board` for Red.
    pub fn search(&self, game: &ConnectFour, board: &Board) -> Result<SearchResult, GameError> {
        self.alphabeta(game, board, self.depth, i64::MIN, i64::MAX, true)
    }

    fn leaf_value(&self, board: &Board, outcome: Outcome) -> i64 {
        match outcome {
            Outcome::Win(winner) => WIN_SCORE * i64::from(winner.sign()),
            Outcome::Draw => 0,
            Outcome::Ongoing => self.heuristic.evaluate(board, Player::Red),
        }
    }

    fn alphabeta(
        &self,
        game: &ConnectFour,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> Result<SearchResult, GameError> {
        let mover = if maximizing { Player::Red } else { Player::Yellow };
        let moves = game.valid_moves(board);
        let outcome = game.win_state(board);

        if depth == 0 || outcome.is_terminal() {
            return Ok(SearchResult {
                column: None,
                value: self.leaf_value(board, outcome),
            });
        }
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let mut best = SearchResult {
            column: None,
            value: if maximizing { i64::MIN } else { i64::MAX },
        };

        for col in moves.iter() {
            let child = game.apply_move(board, mover, col)?;
            let value = self
                .alphabeta(game, &child, depth - 1, alpha, beta, !maximizing)?
                .value;

            // Only a strict improvement replaces the best move, so ties keep
            // the lowest column.
            if maximizing {
                if value > best.value {
                    best = SearchResult { column: Some(col), value };
                }
                alpha = alpha.max(best.value);
            } else {
                if value < best.value {
                    best = SearchResult { column: Some(col), value };
                }
                beta = beta.min(best.value);
            }

            if alpha >= beta {
                trace!(depth, col, "cutoff");
                break;
            }
        }

        Ok(best)
    }
}

impl Agent<ConnectFour> for MinimaxAgent {
    fn select_move(&mut self, game: &ConnectFour, position: &Board) -> Result<usize, GameError> {
        if game.valid_moves(position).is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let result = self.search(game, position)?;
        let column = result.column.ok_or(GameError::NoLegalMoves)?;
        debug!(column, value = result.value, depth = self.depth, "minimax move");
        Ok(column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
