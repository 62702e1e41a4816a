//! Diagnostic operator implementation.

use async_trait::async_trait;

use crate::adapter::outbound::mongo::MongoAdmin;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::diagnostic::{ConnectionTarget, DiagnosticOperator};
use crate::port::DatabaseAdmin;

use super::entry::Operator;

#[async_trait]
impl DiagnosticOperator for Operator {
    fn connection_target(&self, config_toml: &str) -> Result<ConnectionTarget> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConnectionTarget {
            uri: config.mongo.uri,
            admin_database: config.admin.database,
            admin_username: config.admin.username,
        })
    }

    async fn verify_connection(&self, config_toml: &str) -> Result<()> {
        let config = Config::parse_toml(config_toml)?;
        let plan = config.provision_plan();
        MongoAdmin::new(config.mongo)
            .authenticate(&plan.admin_db, &plan.admin)
            .await
    }
}
