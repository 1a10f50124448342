/// Alias for `Result<T, PqError>`.
pub type PqResult<T> = Result<T, PqError>;

/// Errors raised when building or parsing character data.
#[derive(Debug, thiserror::Error)]
pub enum PqError {
    /// Text that is not a roman numeral.
    #[error("invalid roman numeral: \"{0}\"")]
    InvalidRoman(String),

    /// A stat abbreviation that does not name a known stat.
    #[error("unknown stat: \"{0}\"")]
    UnknownStat(String),

    /// An equipment slot name that does not name a known slot.
    #[error("unknown equipment slot: \"{0}\"")]
    UnknownSlot(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
