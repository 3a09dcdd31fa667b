//! Error types for gormgen-db

use thiserror::Error;

/// Result type alias for gormgen-db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while connecting to or introspecting a database
#[derive(Error, Debug)]
pub enum Error {
    /// MySQL driver error
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Connection could not be configured or established
    #[error("Connection error: {0}")]
    Connection(String),

    /// The catalog has no columns for the requested table
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Column not found in row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Row decode error
    #[error("Failed to decode row: {0}")]
    RowDecode(String),
}
