// Error handling framework

use thiserror::Error;

/// Database-specific errors
///
/// `Display` renders the carried message verbatim: the handler embeds it
/// untouched in the error response body, so no prefix text is added here.
/// Use [`DbError::kind`] for the stable label in log fields.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to obtain a connection from the pool
    #[error("{0}")]
    Connection(String),

    /// Failed to execute a query on an acquired connection
    #[error("{0}")]
    Query(String),
}

impl DbError {
    /// Stable label identifying the failed operation, for structured logging
    pub fn kind(&self) -> &'static str {
        match self {
            DbError::Connection(_) => "connection",
            DbError::Query(_) => "query",
        }
    }
}
