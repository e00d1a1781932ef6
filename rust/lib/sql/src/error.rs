use thiserror::Error;

/// Failures raised by a [`SQLStore`](crate::SQLStore) backend.
#[derive(Error, Debug)]
pub enum SQLError {
    /// Preparing or running a read query failed.
    #[error("query error: {0}")]
    Query(String),

    /// Running a statement (DDL, INSERT/UPDATE/DELETE) failed.
    #[error("execution error: {0}")]
    Execution(String),

    /// Opening or configuring the database failed.
    #[error("connection error: {0}")]
    Connection(String),
}
