//! Import operator implementation.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::adapter::outbound::feed::read_feed;
use crate::domain::ImportReport;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_importer;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::import::{ImportOperator, ImportRequest, ImportTarget};

use super::entry::Operator;

fn resolve(request: &ImportRequest) -> Result<Config> {
    let mut config = Config::parse_toml(&request.config_toml)?;
    if let Some(feed) = &request.feed {
        config.import.feed = PathBuf::from(feed);
    }
    Ok(config)
}

#[async_trait]
impl ImportOperator for Operator {
    fn prepare_import(&self, request: &ImportRequest) -> Result<ImportTarget> {
        let config = resolve(request)?;

        Ok(ImportTarget {
            feed: config.import.feed.display().to_string(),
            database: config.application.database,
            collection: config.application.collection,
            username: config.application.username,
            dry_run: request.dry_run,
        })
    }

    async fn execute_import(&self, request: ImportRequest) -> Result<ImportReport> {
        let config = resolve(&request)?;
        let entries = read_feed(&config.import.feed)?;
        let importer = build_importer(&config, request.dry_run).await?;
        importer.run(&entries).await
    }
}
