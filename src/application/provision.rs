//! One-time instance bootstrap.
//!
//! Runs the five administrative steps of a [`ProvisionPlan`] in order against
//! a [`DatabaseAdmin`]. The first failure aborts the run; nothing is retried
//! or rolled back.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::domain::provision::format_roles;
use crate::domain::{ExistingPolicy, ProvisionPlan, ProvisionReport, ProvisionStep, StepOutcome};
use crate::error::{Error, ProvisionError, Result};
use crate::port::DatabaseAdmin;

/// Executes bootstrap plans.
pub struct Provisioner<A> {
    admin: A,
}

/// Wrap a failing step so the error names where the run stopped.
async fn step<T>(
    step: ProvisionStep,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    fut.await.map_err(|source| {
        Error::from(ProvisionError::Step {
            step,
            source: Box::new(source),
        })
    })
}

impl<A: DatabaseAdmin> Provisioner<A> {
    pub const fn new(admin: A) -> Self {
        Self { admin }
    }

    /// Access the underlying admin adapter.
    pub fn admin(&self) -> &A {
        &self.admin
    }

    /// Run the plan.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::Step`] for adapter failures,
    /// [`ProvisionError::UserExists`] / [`ProvisionError::CollectionExists`]
    /// under [`ExistingPolicy::Fail`], and [`ProvisionError::RoleMismatch`]
    /// when an existing user holds different roles than planned.
    pub async fn run(&self, plan: &ProvisionPlan) -> Result<ProvisionReport> {
        let mut report = ProvisionReport::default();

        let context = plan.admin_db.as_str();
        debug!(db = context, "Selected administrative database");
        report.record(ProvisionStep::SelectAdminDatabase, StepOutcome::Done);

        step(
            ProvisionStep::Authenticate,
            self.admin.authenticate(context, &plan.admin),
        )
        .await?;
        info!(
            db = context,
            user = plan.admin.username(),
            "Authenticated as administrator"
        );
        report.record(ProvisionStep::Authenticate, StepOutcome::Done);

        let context = plan.app_db.as_str();
        debug!(db = context, "Selected application database");
        report.record(ProvisionStep::SelectApplicationDatabase, StepOutcome::Done);

        let outcome = self.create_user(context, plan).await?;
        report.record(ProvisionStep::CreateUser, outcome);

        let outcome = self.create_collection(context, plan).await?;
        report.record(ProvisionStep::CreateCollection, outcome);

        info!(
            db = context,
            user = plan.app_user.username(),
            collection = %plan.collection,
            noop = report.is_noop(),
            "Provisioning complete"
        );
        Ok(report)
    }

    async fn create_user(&self, db: &str, plan: &ProvisionPlan) -> Result<StepOutcome> {
        let username = plan.app_user.username();
        let existing = step(ProvisionStep::CreateUser, self.admin.find_user(db, username)).await?;

        if let Some(existing) = existing {
            if plan.on_existing == ExistingPolicy::Fail {
                return Err(ProvisionError::UserExists {
                    user: username.to_string(),
                    db: db.to_string(),
                }
                .into());
            }
            if !existing.has_exact_roles(&plan.roles) {
                return Err(ProvisionError::RoleMismatch {
                    user: username.to_string(),
                    expected: format_roles(&plan.roles),
                    found: format_roles(&existing.roles),
                }
                .into());
            }
            warn!(db, user = username, "User already exists, skipping");
            return Ok(StepOutcome::Skipped);
        }

        step(
            ProvisionStep::CreateUser,
            self.admin.create_user(db, &plan.app_user, &plan.roles),
        )
        .await?;
        info!(
            db,
            user = username,
            roles = %format_roles(&plan.roles),
            "Created application user"
        );
        Ok(StepOutcome::Done)
    }

    async fn create_collection(&self, db: &str, plan: &ProvisionPlan) -> Result<StepOutcome> {
        let name = plan.collection.as_str();
        let exists = step(
            ProvisionStep::CreateCollection,
            self.admin.collection_exists(db, name),
        )
        .await?;

        if exists {
            if plan.on_existing == ExistingPolicy::Fail {
                return Err(ProvisionError::CollectionExists {
                    collection: name.to_string(),
                    db: db.to_string(),
                }
                .into());
            }
            warn!(db, collection = name, "Collection already exists, skipping");
            return Ok(StepOutcome::Skipped);
        }

        step(
            ProvisionStep::CreateCollection,
            self.admin.create_collection(db, name),
        )
        .await?;
        info!(db, collection = name, "Created collection");
        Ok(StepOutcome::Done)
    }
}
