//! Provisioning operator implementation.

use async_trait::async_trait;

use crate::domain::{format_roles, ProvisionReport};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_provisioner;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::provision::{
    ProvisionOperator, ProvisionRequest, ProvisionTarget,
};

use super::entry::Operator;

fn resolve(request: &ProvisionRequest) -> Result<Config> {
    let mut config = Config::parse_toml(&request.config_toml)?;
    if let Some(policy) = request.on_existing {
        config.provision.on_existing = policy;
    }
    Ok(config)
}

#[async_trait]
impl ProvisionOperator for Operator {
    fn prepare_provision(&self, request: &ProvisionRequest) -> Result<ProvisionTarget> {
        let config = resolve(request)?;
        let plan = config.provision_plan();

        Ok(ProvisionTarget {
            uri: config.mongo.uri,
            admin_database: plan.admin_db,
            admin_username: plan.admin.username().to_string(),
            app_database: plan.app_db,
            app_username: plan.app_user.username().to_string(),
            roles: format_roles(&plan.roles),
            collection: plan.collection,
            on_existing: plan.on_existing,
        })
    }

    async fn execute_provision(&self, request: ProvisionRequest) -> Result<ProvisionReport> {
        let config = resolve(&request)?;
        build_provisioner(&config)
            .run(&config.provision_plan())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExistingPolicy;

    #[test]
    fn prepare_reflects_policy_override() {
        let request = ProvisionRequest {
            config_toml: "[provision]\non_existing = \"skip\"\n".into(),
            on_existing: Some(ExistingPolicy::Fail),
        };
        let target = Operator.prepare_provision(&request).unwrap();
        assert_eq!(target.on_existing, ExistingPolicy::Fail);
        assert_eq!(target.app_username, "app_user");
        assert_eq!(target.roles, "readWrite@products");
    }

    #[test]
    fn prepare_uses_configured_names() {
        let request = ProvisionRequest {
            config_toml: "[application]\ndatabase = \"catalogue\"\ncollection = \"items\"\n"
                .into(),
            on_existing: None,
        };
        let target = Operator.prepare_provision(&request).unwrap();
        assert_eq!(target.app_database, "catalogue");
        assert_eq!(target.collection, "items");
        assert_eq!(target.roles, "readWrite@catalogue");
        assert_eq!(target.on_existing, ExistingPolicy::Skip);
    }
}
