use pq_content::ContentError;
use pq_core::PqError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised at the engine's boundaries. Advancing the clock never fails.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid character data at creation.
    #[error(transparent)]
    Character(#[from] PqError),

    /// Content tables failed validation.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// An engine configuration value is out of range.
    #[error("invalid engine configuration: {0}")]
    Config(String),
}
