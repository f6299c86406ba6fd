//! Connect Four rules engine: board representation, players, outcomes and the
//! [`Game`] capability set, with copy-on-write move application.

mod board;
mod moves;
mod outcome;
mod player;
mod rules;

pub use board::{Board, Cell};
pub use moves::{ValidMoves, MAX_COLS};
pub use outcome::{Outcome, DRAW_VALUE};
pub use player::Player;
pub use rules::{BoardConfig, ConnectFour, Game};
