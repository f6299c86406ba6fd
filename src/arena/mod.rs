//! Seat-balanced evaluation harness: plays matches between two agents and
//! tallies results, alternating who moves first.

mod renderer;
mod tally;

use std::time::Instant;

use tracing::{debug, info, warn};

pub use renderer::{NoopRenderer, Renderer, TextRenderer};
pub use tally::{MatchTally, SeatTally, TournamentReport};

use crate::ai::Agent;
use crate::error::{ConfigError, GameError};
use crate::game::{Game, Outcome, Player};

/// Tournament configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Total games; half are played with each agent moving first.
    pub games: usize,
    /// Seed for randomized agents. Drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Render every ply.
    pub verbose: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 40,
            seed: None,
            verbose: false,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.games % 2 != 0 {
            return Err(ConfigError::Validation(
                "arena.games must be even so both agents move first equally often".into(),
            ));
        }
        Ok(())
    }
}

/// Runs matches between any two agents playing the same game.
pub struct Arena<G: Game> {
    game: G,
    renderer: Option<Box<dyn Renderer<G::Position>>>,
}

impl<G: Game> Arena<G> {
    pub fn new(game: G) -> Self {
        Arena {
            game,
            renderer: None,
        }
    }

    /// Render every ply and the final position through `renderer`.
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer<G::Position>>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Play one game with `first` in the Red seat and `second` in the Yellow
    /// seat. The returned outcome names the winning seat.
    pub fn play_one_match(
        &mut self,
        first: &mut dyn Agent<G>,
        second: &mut dyn Agent<G>,
    ) -> Result<Outcome, GameError> {
        let mut board = self.game.initial();
        let mut player = Player::Red;
        let mut ply = 0;

        loop {
            let status = Outcome::from_value(self.game.game_ended(&board, Player::Red), Player::Red)?;
            if status.is_terminal() {
                if let Some(renderer) = self.renderer.as_mut() {
                    info!(ply, result = ?status, "game over");
                    renderer.render(&board);
                }
                return Ok(status);
            }

            ply += 1;
            if let Some(renderer) = self.renderer.as_mut() {
                info!(ply, player = player.name(), "turn");
                renderer.render(&board);
            }

            let canonical = self.game.canonicalize(&board, player);
            let agent: &mut dyn Agent<G> = match player {
                Player::Red => &mut *first,
                Player::Yellow => &mut *second,
            };
            let column = agent.select_move(&self.game, &canonical)?;

            let valid = self.game.valid_moves(&canonical);
            if !valid.contains(column) {
                warn!(agent = agent.name(), column, ?valid, "agent selected an illegal move");
                return Err(if column < valid.width() {
                    GameError::ColumnFull { column }
                } else {
                    GameError::IllegalMove {
                        column,
                        width: valid.width(),
                    }
                });
            }

            board = self.game.apply_move(&board, player, column)?;
            player = player.other();
        }
    }

    /// Play `total_games` games, agent A moving first in the first half and
    /// agent B in the second.
    pub fn play_tournament(
        &mut self,
        agent_a: &mut dyn Agent<G>,
        agent_b: &mut dyn Agent<G>,
        total_games: usize,
    ) -> Result<TournamentReport, GameError> {
        if total_games % 2 != 0 {
            return Err(GameError::UnevenTournament { games: total_games });
        }

        let half = total_games / 2;
        let mut report = TournamentReport::default();
        let started = Instant::now();

        for game_idx in 0..total_games {
            let game_started = Instant::now();
            let second_half = game_idx >= half;
            let outcome = if second_half {
                self.play_one_match(agent_b, agent_a)?
            } else {
                self.play_one_match(agent_a, agent_b)?
            };
            report.record(usize::from(second_half), outcome.winner());
            debug!(
                game_idx,
                result = ?outcome,
                first = if second_half { agent_b.name() } else { agent_a.name() },
                elapsed_ms = game_started.elapsed().as_millis() as u64,
                "game finished"
            );
        }

        let tally = report.tally;
        info!(
            a = agent_a.name(),
            b = agent_b.name(),
            a_wins = tally.agent_a_wins,
            b_wins = tally.agent_b_wins,
            draws = tally.draws,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tournament finished"
        );
        Ok(report)
    }
}
