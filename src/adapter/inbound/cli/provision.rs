//! Handler for the `provision` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::ProvisionArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{ProvisionReport, StepOutcome};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;
use crate::port::inbound::operator::provision::{ProvisionRequest, ProvisionTarget};

/// Execute the provision command.
pub async fn execute(
    service: &dyn OperatorPort,
    args: &ProvisionArgs,
    config_toml: String,
) -> Result<()> {
    let request = ProvisionRequest {
        config_toml,
        on_existing: args.on_existing.map(Into::into),
    };
    let target = service.prepare_provision(&request)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Deployment", &target.uri);
    output::field(
        "Administrator",
        format!("{}@{}", target.admin_username, target.admin_database),
    );
    output::field("On existing", target.on_existing);

    let pb = output::spinner(&format!(
        "Provisioning {}",
        output::highlight(&target.app_database)
    ));
    let report = match service.execute_provision(request).await {
        Ok(report) => {
            output::spinner_success(&pb, "Provisioning finished");
            report
        }
        Err(e) => {
            output::spinner_fail(&pb, "Provisioning failed");
            return Err(e);
        }
    };

    print_report(&target, &report);
    Ok(())
}

fn print_report(target: &ProvisionTarget, report: &ProvisionReport) {
    output::section("Steps");
    for (step, outcome) in &report.steps {
        if output::is_json() {
            output::record("step", json!({ "step": step, "outcome": outcome }));
            continue;
        }
        match outcome {
            StepOutcome::Done => output::success(step.as_str()),
            StepOutcome::Skipped => {
                output::skipped(&format!("{} (already exists)", step.as_str()));
            }
        }
    }

    output::section("Application");
    output::field("Database", &target.app_database);
    output::field("User", &target.app_username);
    output::field("Roles", &target.roles);
    output::field("Collection", &target.collection);

    if report.is_noop() {
        output::note("Nothing to do, the instance was already provisioned");
    }
}
