//! Connection settings for the MongoDB deployment.

use serde::{Deserialize, Serialize};

/// `[mongo]` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MongoConfig {
    /// Connection string without credentials, e.g. `mongodb://db:27017`.
    ///
    /// Overridden by `STOCKROOM_MONGO_URI`.
    pub uri: String,
    /// Name reported to the server in the handshake.
    pub app_name: String,
    /// TCP connect timeout.
    pub connect_timeout_ms: u64,
    /// How long to wait for a suitable server before failing an operation.
    pub server_selection_timeout_ms: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".into(),
            app_name: "stockroom".into(),
            connect_timeout_ms: 10_000,
            server_selection_timeout_ms: 30_000,
        }
    }
}
