use crate::error::GameError;
use crate::game::Game;

/// Universal interface for all move-selecting agents.
///
/// Agents are always handed the canonical form of the position, so the side
/// to move is represented by `+1` ([`Player::Red`](crate::game::Player::Red))
/// no matter which seat the agent occupies. An agent may keep internal state
/// between calls but must never alter the game itself.
pub trait Agent<G: Game> {
    /// Select a column for the side to move in the canonical `position`.
    fn select_move(&mut self, game: &G, position: &G::Position) -> Result<usize, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
