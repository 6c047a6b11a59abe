use thiserror::Error;

use crate::grid::GridError;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, VoicegridError>;

/// Errors surfaced by the targeting and layout engines.
#[derive(Debug, Error)]
pub enum VoicegridError {
    #[error("no tile is assigned to `{0}`")]
    UnknownTarget(String),
    #[error("malformed tile code `{0}`")]
    MalformedCode(String),
    #[error("invalid settings: {0}")]
    Settings(String),
    #[error("invalid colour `{0}`")]
    Color(String),
    #[error("unrecognised command: {0}")]
    Command(String),
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
