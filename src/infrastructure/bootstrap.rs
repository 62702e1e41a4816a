//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::mongo::{MongoAdmin, MongoProductStore};
use crate::application::{Importer, Provisioner};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Provisioner talking to the configured deployment.
pub fn build_provisioner(config: &Config) -> Provisioner<MongoAdmin> {
    info!(uri = %config.mongo.uri, "Using MongoDB deployment");
    Provisioner::new(MongoAdmin::new(config.mongo.clone()))
}

/// Importer writing to the product collection as the application user.
///
/// # Errors
///
/// Returns an error if the connection string is invalid.
pub async fn build_importer(config: &Config, dry_run: bool) -> Result<Importer<MongoProductStore>> {
    let app = &config.application;
    let store = MongoProductStore::connect(
        &config.mongo,
        &config.app_credential(),
        &app.database,
        &app.collection,
    )
    .await?;
    info!(
        db = %app.database,
        collection = %app.collection,
        user = %app.username,
        "Connected product store"
    );
    Ok(Importer::new(store).dry_run(dry_run))
}
