//! Handler for the `import` command.

use crate::adapter::inbound::cli::command::ImportArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::ImportReport;
use crate::error::Result;
use crate::port::inbound::operator::import::ImportRequest;
use crate::port::inbound::operator::port::OperatorPort;

/// Execute the import command.
pub async fn execute(service: &dyn OperatorPort, args: &ImportArgs, config_toml: String) -> Result<()> {
    let request = ImportRequest {
        config_toml,
        feed: args
            .feed
            .as_ref()
            .map(|path| path.to_string_lossy().to_string()),
        dry_run: args.dry_run,
    };
    let target = service.prepare_import(&request)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Feed", &target.feed);
    output::field(
        "Target",
        format!("{}.{}", target.database, target.collection),
    );
    if output::verbosity() > 0 {
        output::field("User", &target.username);
    }
    if target.dry_run {
        output::warning("Dry-run mode enabled, nothing will be written");
    }

    let pb = output::spinner(&format!("Importing {}", output::highlight(&target.feed)));
    let report = match service.execute_import(request).await {
        Ok(report) => {
            output::spinner_success(&pb, "Import finished");
            report
        }
        Err(e) => {
            output::spinner_fail(&pb, "Import failed");
            return Err(e);
        }
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &ImportReport) {
    if output::is_json() {
        if let Ok(payload) = serde_json::to_value(report) {
            output::record("import", payload);
        }
        return;
    }

    output::section("Summary");
    output::field("Entries", report.total());
    output::field("Inserted", report.inserted);
    output::field("Updated", report.updated);
    output::field("Unchanged", report.unchanged);
    output::field("Skipped", report.skipped);
    output::field("Failed", report.failed);

    let rejected = report.skipped + report.failed;
    if rejected > 0 {
        output::warning(&format!(
            "{rejected} of {} entries were not imported",
            report.total()
        ));
        output::hint("rerun with -v to see the reason for each entry");
    }
}
