use thiserror::Error;

/// Errors surfaced by the database client and the data analyzer.
///
/// Every failure is returned to the caller as a value; nothing in the
/// library prints or panics. The binary decides how to log each case.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("query execution failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("database connection is not available")]
    NotConnected,

    #[error("query result did not match the trip schema: {0}")]
    Schema(#[source] sqlx::Error),
}
