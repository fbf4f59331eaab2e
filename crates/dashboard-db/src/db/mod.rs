//! Database module for the dashboard.
//!
//! Opens the single MySQL connection the dashboard works through.

pub mod connection;

pub use connection::{connect, health_check, server_version};
