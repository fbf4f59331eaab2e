//! Configuration module for the dashboard database connection.
//!
//! Settings come from `DB_`-prefixed environment variables, parsed with
//! the `envy` crate. Whether those variables are honoured at all depends
//! on the [`DeploymentMode`].

mod database;

pub use database::{DatabaseConfig, DbEnv, DeploymentMode};
