pub mod config;
pub mod services;

pub use config::database::{
    bootstrap, bootstrap_with, BootstrapError, MongoSettings, DEFAULT_DB_NAME, DEFAULT_ENV_PATH,
};
pub use services::mongo::{ConnectError, Connector, MongoConnector};
