use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GameError;
use crate::game::{Game, Outcome, Player};

use super::agent::Agent;

/// Takes an immediate win when one exists, otherwise blocks an immediate
/// loss, otherwise plays a random move. Choices within a category are
/// random.
pub struct OneStepLookaheadAgent {
    rng: StdRng,
}

impl OneStepLookaheadAgent {
    pub fn new(rng: StdRng) -> Self {
        OneStepLookaheadAgent { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    fn pick(&mut self, moves: &[usize]) -> usize {
        moves[self.rng.random_range(0..moves.len())]
    }
}

impl<G: Game> Agent<G> for OneStepLookaheadAgent {
    fn select_move(&mut self, game: &G, position: &G::Position) -> Result<usize, GameError> {
        let me = Player::Red;
        let mut winning = Vec::new();
        let mut blocking = Vec::new();
        let mut fallback = Vec::new();

        for col in game.valid_moves(position).iter() {
            let mine = game.apply_move(position, me, col)?;
            if game.win_state(&mine) == Outcome::Win(me) {
                winning.push(col);
            }
            let theirs = game.apply_move(position, me.other(), col)?;
            if game.win_state(&theirs) == Outcome::Win(me.other()) {
                blocking.push(col);
            } else {
                fallback.push(col);
            }
        }

        let column = if !winning.is_empty() {
            let col = self.pick(&winning);
            debug!(col, ?winning, "playing winning action");
            col
        } else if !blocking.is_empty() {
            let col = self.pick(&blocking);
            debug!(col, ?blocking, "playing loss stopping action");
            col
        } else if !fallback.is_empty() {
            let col = self.pick(&fallback);
            debug!(col, ?fallback, "playing random action");
            col
        } else {
            return Err(GameError::NoLegalMoves);
        };

        Ok(column)
    }

    fn name(&self) -> &str {
        "OneStepLookahead"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, BoardConfig, ConnectFour};

    fn game() -> ConnectFour {
        ConnectFour::new(BoardConfig::default()).unwrap()
    }

    fn parse(text: &str) -> Board {
        Board::parse(text, 4).unwrap()
    }

    #[test]
    fn takes_immediate_win() {
        let game = game();
        let board = parse(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            O O O . . . .
            X X X . . . O
            ",
        );
        for seed in 0..10 {
            let mut agent = OneStepLookaheadAgent::from_seed(seed);
            assert_eq!(agent.select_move(&game, &board), Ok(3));
        }
    }

    #[test]
    fn blocks_immediate_loss() {
        let game = game();
        let board = parse(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . O
            . . . . . . O
            . X . X . X O
            ",
        );
        for seed in 0..10 {
            let mut agent = OneStepLookaheadAgent::from_seed(seed);
            assert_eq!(agent.select_move(&game, &board), Ok(6));
        }
    }

    #[test]
    fn otherwise_plays_a_legal_move() {
        let game = game();
        let board = game.initial();
        let mut agent = OneStepLookaheadAgent::from_seed(3);
        for _ in 0..20 {
            let col = agent.select_move(&game, &board).unwrap();
            assert!(game.valid_moves(&board).contains(col));
        }
    }

    #[test]
    fn full_board_has_no_moves() {
        let game = game();
        let board = parse(
            "
            XXOOXXO
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
            OOXXOOX
            ",
        );
        let mut agent = OneStepLookaheadAgent::from_seed(0);
        assert_eq!(agent.select_move(&game, &board), Err(GameError::NoLegalMoves));
    }
}
