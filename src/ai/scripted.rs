use crate::error::GameError;
use crate::game::Game;

use super::agent::Agent;

/// Replays a fixed list of columns, cycling when it runs out.
///
/// The script is played as written, legal or not; rejecting bad moves is the
/// arena's job.
pub struct ScriptedAgent {
    name: String,
    columns: Vec<usize>,
    next: usize,
}

impl ScriptedAgent {
    pub fn new(name: impl Into<String>, columns: Vec<usize>) -> Self {
        assert!(!columns.is_empty(), "a script needs at least one column");
        ScriptedAgent {
            name: name.into(),
            columns,
            next: 0,
        }
    }

    /// An agent that always plays `column`.
    pub fn constant(column: usize) -> Self {
        Self::new(format!("Column{column}"), vec![column])
    }
}

impl<G: Game> Agent<G> for ScriptedAgent {
    fn select_move(&mut self, _game: &G, _position: &G::Position) -> Result<usize, GameError> {
        let column = self.columns[self.next % self.columns.len()];
        self.next += 1;
        Ok(column)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardConfig, ConnectFour};

    #[test]
    fn cycles_through_script() {
        let game = ConnectFour::new(BoardConfig::default()).unwrap();
        let board = game.initial();
        let mut agent = ScriptedAgent::new("script", vec![2, 5]);
        let picks: Vec<usize> = (0..5)
            .map(|_| agent.select_move(&game, &board).unwrap())
            .collect();
        assert_eq!(picks, vec![2, 5, 2, 5, 2]);
    }

    #[test]
    fn constant_agent_name() {
        let agent = ScriptedAgent::constant(0);
        assert_eq!(Agent::<ConnectFour>::name(&agent), "Column0");
    }
}
