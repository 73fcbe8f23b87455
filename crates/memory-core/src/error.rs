use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("Game is not complete yet")]
    NotComplete,
}
