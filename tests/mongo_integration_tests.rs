//! End-to-end tests against a running MongoDB deployment.
//!
//! # Running
//!
//! The tests are gated behind the `integration-tests` feature and marked
//! `#[ignore]`. Start a deployment whose root login matches the defaults:
//!
//! ```bash
//! docker run --rm -d -p 27017:27017 \
//!   -e MONGO_INITDB_ROOT_USERNAME=root \
//!   -e MONGO_INITDB_ROOT_PASSWORD=12345678 mongo:7
//! cargo test --features integration-tests --test mongo_integration_tests -- --ignored
//! ```
//!
//! `STOCKROOM_TEST_MONGO_URI` and `STOCKROOM_TEST_ADMIN_PASSWORD` point the
//! tests at another deployment.
//!
//! # Isolation
//!
//! Every test provisions its own database and user, named with a unique
//! suffix, and drops them when it finishes.

#![cfg(feature = "integration-tests")]

use std::time::{SystemTime, UNIX_EPOCH};

use bson::doc;

use stockroom::adapter::outbound::feed::parse_feed;
use stockroom::adapter::outbound::mongo::client;
use stockroom::domain::{ProvisionStep, RoleGrant, StepOutcome};
use stockroom::error::{Error, ProvisionError};
use stockroom::infrastructure::bootstrap::{build_importer, build_provisioner};
use stockroom::infrastructure::config::settings::Config;
use stockroom::port::DatabaseAdmin;
use stockroom::testkit::feed::SAMPLE_FEED;

fn mongo_uri() -> String {
    std::env::var("STOCKROOM_TEST_MONGO_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

fn admin_password() -> String {
    std::env::var("STOCKROOM_TEST_ADMIN_PASSWORD").unwrap_or_else(|_| "12345678".to_string())
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

/// Configuration for a throwaway database and user.
fn scratch_config(admin_password: &str, on_existing: &str) -> Config {
    let suffix = unique_suffix();
    let toml = format!(
        r#"
[mongo]
uri = "{uri}"
connect_timeout_ms = 2000
server_selection_timeout_ms = 5000

[admin]
password = "{admin_password}"

[application]
database = "stockroom_it_{suffix}"
username = "app_user_{suffix}"
password = "it-password"

[provision]
on_existing = "{on_existing}"
"#,
        uri = mongo_uri(),
    );
    Config::parse_toml_with_env(&toml, |_| None).expect("valid config")
}

fn with_policy(config: &Config, on_existing: &str) -> Config {
    let mut config = config.clone();
    config.provision.on_existing = match on_existing {
        "fail" => stockroom::domain::ExistingPolicy::Fail,
        _ => stockroom::domain::ExistingPolicy::Skip,
    };
    config
}

/// Drop the scratch user and database with the real administrator login.
async fn cleanup(config: &Config) {
    let mut admin = config.clone();
    admin.admin.password = admin_password();
    let plan = admin.provision_plan();
    let client = client::connect(&admin.mongo, &plan.admin, &plan.admin_db)
        .await
        .expect("admin client");
    let db = client.database(&plan.app_db);
    let _ = db
        .run_command(doc! { "dropUser": plan.app_user.username() })
        .await;
    let _ = db.drop().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn fresh_instance_gets_one_user_and_one_collection() {
    let config = scratch_config(&admin_password(), "skip");
    let plan = config.provision_plan();
    let provisioner = build_provisioner(&config);

    let result = provisioner.run(&plan).await;

    let user = provisioner
        .admin()
        .find_user(&plan.app_db, plan.app_user.username())
        .await;
    let collection = provisioner
        .admin()
        .collection_exists(&plan.app_db, &plan.collection)
        .await;
    cleanup(&config).await;

    let report = result.expect("provision succeeds");
    assert!(report
        .steps
        .iter()
        .all(|(_, outcome)| *outcome == StepOutcome::Done));
    let user = user.expect("usersInfo").expect("user exists");
    assert_eq!(user.roles, vec![RoleGrant::read_write(&plan.app_db)]);
    assert!(collection.expect("listCollections"));
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn second_run_skips_or_fails_by_policy() {
    let config = scratch_config(&admin_password(), "skip");
    let plan = config.provision_plan();
    let first = build_provisioner(&config).run(&plan).await;

    let skipped = build_provisioner(&config).run(&plan).await;
    let strict = with_policy(&config, "fail");
    let failed = build_provisioner(&strict)
        .run(&strict.provision_plan())
        .await;
    cleanup(&config).await;

    first.expect("first run succeeds");
    let skipped = skipped.expect("skip policy succeeds");
    assert_eq!(
        skipped.outcome(ProvisionStep::CreateUser),
        Some(StepOutcome::Skipped)
    );
    assert_eq!(
        skipped.outcome(ProvisionStep::CreateCollection),
        Some(StepOutcome::Skipped)
    );
    assert!(matches!(
        failed,
        Err(Error::Provision(ProvisionError::UserExists { .. }))
    ));
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn wrong_admin_password_creates_nothing() {
    let config = scratch_config("not-the-password", "skip");
    let plan = config.provision_plan();

    let result = build_provisioner(&config).run(&plan).await;

    let mut good = config.clone();
    good.admin.password = admin_password();
    let checker = build_provisioner(&good);
    let plan_good = good.provision_plan();
    checker
        .admin()
        .authenticate(&plan_good.admin_db, &plan_good.admin)
        .await
        .expect("real administrator authenticates");
    let user = checker
        .admin()
        .find_user(&plan.app_db, plan.app_user.username())
        .await
        .expect("usersInfo");
    cleanup(&config).await;

    match result {
        Err(Error::Provision(ProvisionError::Step { step, .. })) => {
            assert_eq!(step, ProvisionStep::Authenticate);
        }
        other => panic!("Expected authenticate failure, got {other:?}"),
    }
    assert!(user.is_none());
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn import_as_application_user_is_repeatable() {
    let config = scratch_config(&admin_password(), "skip");
    let provisioned = build_provisioner(&config)
        .run(&config.provision_plan())
        .await;
    let entries = parse_feed(SAMPLE_FEED).expect("sample feed parses");

    let first = match &provisioned {
        Ok(_) => Some(build_importer(&config, false).await),
        Err(_) => None,
    };
    let (first_report, second_report) = match first {
        Some(Ok(importer)) => (
            Some(importer.run(&entries).await),
            Some(importer.run(&entries).await),
        ),
        _ => (None, None),
    };
    cleanup(&config).await;

    provisioned.expect("provision succeeds");
    let first_report = first_report.expect("importer connects").expect("import");
    assert_eq!(first_report.inserted, 2);
    assert_eq!(first_report.skipped, 1);
    let second_report = second_report.expect("importer connects").expect("reimport");
    assert_eq!(second_report.unchanged, 2);
    assert_eq!(second_report.inserted, 0);
}
