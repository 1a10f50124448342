//! Error types for content loading.

use thiserror::Error;

use crate::tables::Pool;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while loading or validating content tables.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A pool has no entries to draw from.
    #[error("content pool {0} is empty")]
    EmptyPool(Pool),

    /// An entry whose level field is not an integer.
    #[error("content pool {pool}: entry \"{entry}\" has no numeric level")]
    BadEntry {
        /// The pool holding the entry.
        pool: Pool,
        /// The offending entry.
        entry: String,
    },

    /// Reading a tables file failed.
    #[error("reading content tables: {0}")]
    Io(#[from] std::io::Error),

    /// A tables file is not valid JSON for [`crate::ContentTables`].
    #[error("parsing content tables: {0}")]
    Json(#[from] serde_json::Error),
}
