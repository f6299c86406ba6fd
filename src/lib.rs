//! # Connect Arena
//!
//! A generalized Connect Four engine with a heuristic alpha-beta minimax
//! player and a seat-balanced tournament harness for pitting agents against
//! each other.
//!
//! ## Modules
//!
//! - [`game`]: Board state machine, win detection and the [`game::Game`] rules contract
//! - [`ai`]: Agent trait, window heuristic, minimax search and baseline agents
//! - [`arena`]: Match and tournament runner with seat alternation and tallies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
