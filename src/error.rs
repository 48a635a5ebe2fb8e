use std::path::PathBuf;

/// Errors raised by the board engine and move-record replay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid action at ({row},{col})")]
    InvalidAction { row: usize, col: usize },

    #[error("record move #{index} ({row}-{col}) is invalid for both players")]
    InvalidRecord { index: usize, row: usize, col: usize },

    #[error("invalid board size {0}: must be even and at least 4")]
    InvalidSize(usize),

    #[error("expected {expected} cells for the board, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("{0} passed while holding a legal move")]
    IllegalPass(&'static str),
}

/// Errors raised by the symmetry helper primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymmetryError {
    #[error("invalid symmetry axis {0}: axis must be within range [0,3]")]
    InvalidSymmetryAxis(u8),

    #[error("invalid rotation angle {0}: angle must be +-90 or +-180")]
    InvalidRotationAngle(i32),
}

/// Errors raised while decoding compact position hashes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("character {0:?} is not a base-81 digit")]
    InvalidCharacter(char),

    #[error("hash has {actual} digits, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("malformed state-action key: {0}")]
    MalformedKey(String),
}

/// Errors raised while parsing text input (interactive actions, record tokens).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid action string: {0:?}")]
    InvalidAction(String),

    #[error("invalid record token: {0:?}")]
    InvalidRecordToken(String),

    #[error("invalid board text: {0}")]
    InvalidBoard(String),
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
