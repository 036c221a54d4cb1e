//! Error types for the VegBazar storefront

use thiserror::Error;

/// Main error type for storefront infrastructure operations.
///
/// Presentation code never produces these: malformed display data degrades
/// to placeholders instead. Only storage, file and platform plumbing fails.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Clipboard was unavailable or refused the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Platform install prompt failed or was already consumed
    #[error("Install prompt error: {0}")]
    InstallPrompt(String),
}

/// Result type alias using StorefrontError
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Clipboard("no display".to_string());
        assert_eq!(format!("{}", err), "Clipboard error: no display");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StorefrontError = io_err.into();
        assert!(matches!(err, StorefrontError::Io(_)));
    }
}
