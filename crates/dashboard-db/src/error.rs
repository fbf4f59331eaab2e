//! Error types for the dashboard database bootstrap.

use thiserror::Error;

/// Errors raised while resolving settings or talking to MySQL.
#[derive(Error, Debug)]
pub enum DbError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The initial connect failed; the message carries the driver text.
    ///
    /// The driver error is part of the message and is not reported as a
    /// source.
    #[error("Connection failed: {0}")]
    Connection(sqlx::Error),

    /// A statement on an open connection failed
    #[error("Query failed: {0}")]
    Query(sqlx::Error),
}

/// Result type alias using DbError.
pub type DbResult<T> = Result<T, DbError>;

impl From<envy::Error> for DbError {
    fn from(err: envy::Error) -> Self {
        DbError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_carries_driver_text() {
        let err = DbError::Connection(sqlx::Error::PoolTimedOut);
        assert_eq!(
            err.to_string(),
            format!("Connection failed: {}", sqlx::Error::PoolTimedOut)
        );
    }

    #[test]
    fn test_connection_error_has_no_source_chain() {
        let err = DbError::Connection(sqlx::Error::PoolTimedOut);
        assert!(std::error::Error::source(&err).is_none());

        let report = format!("{:?}", anyhow::Error::from(err));
        assert!(!report.contains("Caused by"));
    }

    #[test]
    fn test_config_error() {
        let err = DbError::Config("invalid DB_PORT value".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid DB_PORT value");
    }

    #[test]
    fn test_from_envy_error() {
        let err: DbError = envy::Error::Custom("invalid type".to_string()).into();
        assert!(matches!(err, DbError::Config(_)));
    }
}
