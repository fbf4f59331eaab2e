//! MySQL connection management.

use crate::config::DatabaseConfig;
use crate::error::{DbError, DbResult};
use sqlx::{Connection, MySqlConnection};

/// Open a connection to the configured database.
///
/// One attempt, no retry and no timeout beyond the driver's own.
///
/// # Errors
///
/// Returns [`DbError::Connection`] wrapping the driver error if the
/// server cannot be reached or rejects the credentials.
pub async fn connect(config: &DatabaseConfig) -> DbResult<MySqlConnection> {
    let conn = MySqlConnection::connect_with(&config.connect_options())
        .await
        .map_err(DbError::Connection)?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        user = %config.user,
        "Database connection established"
    );

    Ok(conn)
}

/// Check if the database connection is healthy.
pub async fn health_check(conn: &mut MySqlConnection) -> bool {
    sqlx::query("SELECT 1").execute(&mut *conn).await.is_ok()
}

/// Version string reported by the server.
pub async fn server_version(conn: &mut MySqlConnection) -> DbResult<String> {
    sqlx::query_scalar::<_, String>("SELECT VERSION()")
        .fetch_one(&mut *conn)
        .await
        .map_err(DbError::Query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_refused_reports_driver_error() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::local_defaults()
        };

        let err = connect(&config).await.unwrap_err();
        let DbError::Connection(ref source) = err else {
            panic!("expected connection error, got {err:?}");
        };
        assert!(err.to_string().starts_with("Connection failed: "));
        assert!(err.to_string().contains(&source.to_string()));
    }
}
