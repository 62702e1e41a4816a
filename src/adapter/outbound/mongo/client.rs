//! Client construction.

use std::time::Duration;

use mongodb::options::{ClientOptions, Credential as MongoCredential};
use mongodb::Client;
use tracing::debug;

use super::settings::MongoConfig;
use crate::domain::Credential;
use crate::error::Result;

/// Build a client that authenticates `credential` against `auth_db`.
///
/// The driver connects lazily; the first command performs the handshake.
///
/// # Errors
///
/// Returns an error if the connection string is invalid.
pub async fn connect(settings: &MongoConfig, credential: &Credential, auth_db: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(settings.uri.as_str()).await?;
    options.app_name = Some(settings.app_name.clone());
    options.connect_timeout = Some(Duration::from_millis(settings.connect_timeout_ms));
    options.server_selection_timeout =
        Some(Duration::from_millis(settings.server_selection_timeout_ms));
    options.credential = Some(
        MongoCredential::builder()
            .username(credential.username().to_string())
            .password(credential.password().to_string())
            .source(auth_db.to_string())
            .build(),
    );

    debug!(
        hosts = ?options.hosts,
        user = credential.username(),
        auth_db,
        "Built MongoDB client"
    );
    Ok(Client::with_options(options)?)
}
