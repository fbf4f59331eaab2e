//! Dashboard Database Bootstrap
//!
//! Resolves the database settings for the current deployment, opens the
//! connection and exits non-zero with the driver's message if it fails.

use sqlx::Connection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_db::{
    config::DatabaseConfig,
    db::{connect, health_check, server_version},
    ResultExt,
};

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dashboard_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let (mode, db_config) = DatabaseConfig::from_env().log("loading database config")?;

    tracing::info!(
        mode = %mode,
        url = %db_config.redacted_url(),
        "Configuration loaded"
    );

    let mut conn = connect(&db_config)
        .await
        .log("opening database connection")?;

    if !health_check(&mut conn).await {
        tracing::warn!("Connection opened but SELECT 1 failed");
    }

    let version = server_version(&mut conn)
        .await
        .log("querying server version")?;
    tracing::info!(version = %version, "Connected to MySQL server");

    conn.close().await?;

    Ok(())
}
