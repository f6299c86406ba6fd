use std::path::PathBuf;

/// Errors raised by the rules engine, the agents and the arena.
///
/// None of these are transient: each one points at a defect in an agent or
/// in the state machine and is surfaced to the caller immediately.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: column {column} is outside the board (width {width})")]
    IllegalMove { column: usize, width: usize },

    #[error("illegal move: column {column} is full")]
    ColumnFull { column: usize },

    #[error("no legal moves available on a board that is not terminal")]
    NoLegalMoves,

    #[error("game-ended value {value} matches neither seat nor a draw")]
    InconsistentWinState { value: f32 },

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("tournament needs an even number of games to balance seats, got {games}")]
    UnevenTournament { games: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
