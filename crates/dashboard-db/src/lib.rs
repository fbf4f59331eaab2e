//! Dashboard Database Bootstrap
//!
//! Resolves the dashboard's MySQL settings and opens its connection:
//!
//! - **Docker**: `DB_HOST`, `DB_USER`, `DB_PASS`, `DB_NAME` (and `DB_PORT`)
//!   are read from the environment, each with its own fallback
//! - **Local development**: fixed `localhost` / `root` / `root` / `stmik_ids`
//!
//! The presence of `DB_HOST` decides which of the two applies.
//!
//! ## Modules
//!
//! - [`config`]: Deployment mode detection and settings resolution
//! - [`db`]: Connecting and probing the server
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```ignore
//! use dashboard_db::{config::DatabaseConfig, db::connect};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (_mode, config) = DatabaseConfig::from_env()?;
//!     let conn = connect(&config).await?;
//!     // ... use the connection
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod result_ext;

pub use error::{DbError, DbResult};
pub use result_ext::ResultExt;
