//! Error type for everything outside the ranking engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid CSV:\n  {}", .0.join("\n  "))]
    InvalidCsv(Vec<String>),

    #[error("invalid schedule:\n  {}", .0.join("\n  "))]
    InvalidSchedule(Vec<String>),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type TournamentResult<T> = Result<T, TournamentError>;
