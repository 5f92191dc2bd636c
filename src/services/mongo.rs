use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::Client;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::database::MongoSettings;

/// Failure while establishing or probing a connection. The driver's own
/// error stays attached as the source when one exists.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ConnectError {
    message: String,
    #[source]
    source: Option<mongodb::error::Error>,
}

impl ConnectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    fn driver(source: mongodb::error::Error) -> Self {
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// Minimal capability the bootstrapper needs from a database client:
/// open a connection, then confirm the server answers.
#[async_trait]
pub trait Connector {
    type Handle;

    async fn establish(&self, settings: &MongoSettings) -> Result<Self::Handle, ConnectError>;

    async fn probe(
        &self,
        handle: &Self::Handle,
        settings: &MongoSettings,
    ) -> Result<(), ConnectError>;
}

/// Production connector over the `mongodb` driver.
///
/// TLS is always on, trusting the platform CA bundle. The settings'
/// connect and server-selection bounds go into the client options; the
/// io bound is applied around the ping, which is the only command this
/// crate ever runs.
pub struct MongoConnector;

#[async_trait]
impl Connector for MongoConnector {
    type Handle = Client;

    async fn establish(&self, settings: &MongoSettings) -> Result<Client, ConnectError> {
        info!(uri = %settings.uri, "connecting to MongoDB");

        let mut options = ClientOptions::parse(&settings.uri)
            .await
            .map_err(ConnectError::driver)?;
        options.tls = Some(Tls::Enabled(TlsOptions::default()));
        options.connect_timeout = Some(settings.connect_timeout);
        options.server_selection_timeout = Some(settings.server_selection_timeout);

        Client::with_options(options).map_err(ConnectError::driver)
    }

    async fn probe(&self, handle: &Client, settings: &MongoSettings) -> Result<(), ConnectError> {
        let admin = handle.database("admin");
        let ping = admin.run_command(doc! { "ping": 1 });

        match tokio::time::timeout(settings.io_timeout, ping).await {
            Ok(Ok(_)) => {
                info!("MongoDB ping ok");
                Ok(())
            }
            Ok(Err(e)) => {
                warn!(error = %e, "MongoDB ping failed");
                Err(ConnectError::driver(e))
            }
            Err(_) => Err(ConnectError::new(format!(
                "ping gave no response within {}s",
                settings.io_timeout.as_secs()
            ))),
        }
    }
}
