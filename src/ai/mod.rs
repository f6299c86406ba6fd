//! Move-selecting agents: the [`Agent`] contract, the window heuristic, the
//! alpha-beta minimax searcher and the baseline opponents.

mod agent;
mod heuristic;
mod lookahead;
mod minimax;
mod random;
mod scripted;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic, CENTER_WEIGHT};
pub use lookahead::OneStepLookaheadAgent;
pub use minimax::{MinimaxAgent, SearchConfig, SearchResult, WIN_SCORE};
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
