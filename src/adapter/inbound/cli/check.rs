//! Handler for the `check` command group.

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

/// Authenticate as the administrator and report whether the deployment
/// answers.
pub async fn execute_connection(service: &dyn OperatorPort, config_toml: &str) -> Result<()> {
    let target = service.connection_target(config_toml)?;

    output::section("Connection Check");
    output::field("Deployment", &target.uri);
    output::field(
        "Administrator",
        format!("{}@{}", target.admin_username, target.admin_database),
    );

    let pb = output::spinner("Connecting");
    match service.verify_connection(config_toml).await {
        Ok(()) => {
            output::spinner_success(&pb, "Authenticated and reachable");
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "Connection failed");
            Err(e)
        }
    }
}
