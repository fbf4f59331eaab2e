//! Database configuration for the MySQL connection.

use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;
use std::ffi::OsString;
use std::fmt;

use crate::error::{DbError, DbResult};

const ENV_PREFIX: &str = "DB_";

const DEFAULT_PORT: u16 = 3306;

const DOCKER_HOST: &str = "mysql";
const DOCKER_USER: &str = "root";
const DOCKER_PASSWORD: &str = "root_password";

const LOCAL_HOST: &str = "localhost";
const LOCAL_USER: &str = "root";
const LOCAL_PASSWORD: &str = "root";

const DEFAULT_DATABASE: &str = "stmik_ids";

/// Raw `DB_`-prefixed variables as found in the environment.
///
/// - `DB_HOST`: Database host; its presence selects [`DeploymentMode::Docker`]
/// - `DB_PORT`: Database port
/// - `DB_USER`: Database user
/// - `DB_PASS`: Database password
/// - `DB_NAME`: Database name
///
/// Values the dashboard treats as false (`""` and `"0"`) are normalised
/// to `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DbEnv {
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub name: Option<String>,
}

impl DbEnv {
    /// Read the variables from the process environment.
    pub fn from_env() -> DbResult<Self> {
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Read the variables from an arbitrary `(key, value)` iterator.
    pub fn from_vars<I>(vars: I) -> DbResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: DbEnv = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        Ok(Self {
            host: truthy(raw.host),
            port: truthy(raw.port),
            user: truthy(raw.user),
            pass: truthy(raw.pass),
            name: truthy(raw.name),
        })
    }
}

/// Drops entries whose key or value is not valid UTF-8.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

fn truthy(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "0")
}

/// Where the process is running, which decides the source of its settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Container deployment: settings come from `DB_*` variables.
    Docker,
    /// Local development stack (MAMP/XAMPP): fixed settings.
    ///
    /// The connection goes over TCP to `localhost:3306`, never through the
    /// server's Unix socket, so the local server must accept TCP clients.
    Local,
}

impl DeploymentMode {
    /// `Docker` when `DB_HOST` is set, `Local` otherwise.
    pub fn detect(env: &DbEnv) -> Self {
        if env.host.is_some() {
            DeploymentMode::Docker
        } else {
            DeploymentMode::Local
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentMode::Docker => f.write_str("docker"),
            DeploymentMode::Local => f.write_str("local"),
        }
    }
}

/// Resolved connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,

    /// Database port
    pub port: u16,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Database name
    pub database: String,
}

impl DatabaseConfig {
    /// Settings used inside the container when a variable is missing.
    pub fn docker_defaults() -> Self {
        Self {
            host: DOCKER_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DOCKER_USER.to_string(),
            password: DOCKER_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }

    /// Settings for a local development stack.
    pub fn local_defaults() -> Self {
        Self {
            host: LOCAL_HOST.to_string(),
            port: DEFAULT_PORT,
            user: LOCAL_USER.to_string(),
            password: LOCAL_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> DbResult<(DeploymentMode, Self)> {
        Self::from_db_env(&DbEnv::from_env()?)
    }

    /// Load configuration from an arbitrary `(key, value)` iterator.
    pub fn from_vars<I>(vars: I) -> DbResult<(DeploymentMode, Self)>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_db_env(&DbEnv::from_vars(vars)?)
    }

    /// Resolve settings from already-read variables.
    ///
    /// In local mode every `DB_*` variable is ignored.
    pub fn from_db_env(env: &DbEnv) -> DbResult<(DeploymentMode, Self)> {
        let mode = DeploymentMode::detect(env);
        let config = match mode {
            DeploymentMode::Local => Self::local_defaults(),
            DeploymentMode::Docker => {
                let defaults = Self::docker_defaults();
                let port = match env.port.as_deref() {
                    Some(raw) => raw.parse().map_err(|_| {
                        DbError::Config(format!("invalid DB_PORT value: {raw:?}"))
                    })?,
                    None => defaults.port,
                };
                Self {
                    host: env.host.clone().unwrap_or(defaults.host),
                    port,
                    user: env.user.clone().unwrap_or(defaults.user),
                    password: env.pass.clone().unwrap_or(defaults.password),
                    database: env.name.clone().unwrap_or(defaults.database),
                }
            }
        };
        Ok((mode, config))
    }

    /// Get MySQL connection options.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Get the connection URL string.
    pub fn connection_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }

    /// Connection URL with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}
