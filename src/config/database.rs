use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::config::env::load_values;
use crate::services::mongo::{ConnectError, Connector, MongoConnector};

const MONGO_URI_KEY: &str = "MONGO_URI";
const MONGO_DB_KEY: &str = "MONGO_DB";

/// Database name used when the env file does not name one.
pub const DEFAULT_DB_NAME: &str = "edgar";

/// Conventional env file location, relative to the working directory.
pub const DEFAULT_ENV_PATH: &str = ".env";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Missing {0} in .env.")]
    MissingKey(&'static str),
    #[error("Unable to connect to MongoDB: {0}")]
    Connection(#[from] ConnectError),
}

/// Connection settings resolved from an env file.
///
/// The timeout bounds and the database-name fallback are defaults, not
/// invariants: override any field before handing the settings to a
/// connector.
#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub db_name: String,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl MongoSettings {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            db_name: DEFAULT_DB_NAME.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            io_timeout: DEFAULT_TIMEOUT,
            server_selection_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve settings from the env file at `path`.
    ///
    /// `MONGO_URI` must be present and non-empty; `MONGO_DB` falls back
    /// to `"edgar"`. No network activity happens here.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, BootstrapError> {
        let mut values = load_values(path);

        let uri = values
            .remove(MONGO_URI_KEY)
            .filter(|v| !v.is_empty())
            .ok_or(BootstrapError::MissingKey(MONGO_URI_KEY))?;

        let mut settings = Self::new(uri);
        if let Some(db_name) = values.remove(MONGO_DB_KEY).filter(|v| !v.is_empty()) {
            settings.db_name = db_name;
        }
        Ok(settings)
    }
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Read the env file at `env_path`, open a TLS MongoDB client, and fail
/// fast on an unreachable server.
///
/// Returns the verified client together with the resolved database name;
/// the caller owns the client from then on. Pass [`DEFAULT_ENV_PATH`]
/// when there is no reason to look anywhere else.
pub async fn bootstrap(
    env_path: impl AsRef<Path>,
) -> Result<(mongodb::Client, String), BootstrapError> {
    bootstrap_with(&MongoConnector, env_path).await
}

/// [`bootstrap`] over an injected connector; tests substitute an
/// in-memory double here.
pub async fn bootstrap_with<C: Connector>(
    connector: &C,
    env_path: impl AsRef<Path>,
) -> Result<(C::Handle, String), BootstrapError> {
    let settings = MongoSettings::from_env_file(env_path)?;

    let handle = connector.establish(&settings).await?;
    connector.probe(&handle, &settings).await?;

    info!(db = %settings.db_name, "mongodb connection verified");
    Ok((handle, settings.db_name))
}
