//! Bootstrap plan and report types.
//!
//! A [`ProvisionPlan`] describes the one-time setup of an instance: which
//! administrative login to use, which application user to create with which
//! role grants, and which collection to create. The plan is executed as the
//! five [`ProvisionStep`]s in their fixed order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::credential::Credential;

/// A permission record granting `role` on database `db`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn new(role: impl Into<String>, db: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            db: db.into(),
        }
    }

    /// Read/write access scoped to a single database.
    pub fn read_write(db: impl Into<String>) -> Self {
        Self::new("readWrite", db)
    }
}

impl fmt::Display for RoleGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.role, self.db)
    }
}

/// What to do when the user or collection is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingPolicy {
    /// Leave existing objects alone and report the step as skipped.
    #[default]
    Skip,
    /// Treat existing objects as an error, like a plain re-run would.
    Fail,
}

impl fmt::Display for ExistingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// One administrative step, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionStep {
    SelectAdminDatabase,
    Authenticate,
    SelectApplicationDatabase,
    CreateUser,
    CreateCollection,
}

impl ProvisionStep {
    pub const ALL: [ProvisionStep; 5] = [
        Self::SelectAdminDatabase,
        Self::Authenticate,
        Self::SelectApplicationDatabase,
        Self::CreateUser,
        Self::CreateCollection,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectAdminDatabase => "select admin database",
            Self::Authenticate => "authenticate",
            Self::SelectApplicationDatabase => "select application database",
            Self::CreateUser => "create user",
            Self::CreateCollection => "create collection",
        }
    }
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Done,
    /// The object already existed and the policy allowed leaving it.
    Skipped,
}

/// A user as reported by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user: String,
    pub db: String,
    pub roles: Vec<RoleGrant>,
}

impl UserInfo {
    /// True when the user holds exactly `expected`, ignoring order.
    #[must_use]
    pub fn has_exact_roles(&self, expected: &[RoleGrant]) -> bool {
        self.roles.len() == expected.len() && expected.iter().all(|r| self.roles.contains(r))
    }
}

/// Everything needed to bootstrap one instance.
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub admin_db: String,
    pub admin: Credential,
    pub app_db: String,
    pub app_user: Credential,
    pub roles: Vec<RoleGrant>,
    pub collection: String,
    pub on_existing: ExistingPolicy,
}

impl Default for ProvisionPlan {
    fn default() -> Self {
        Self {
            admin_db: "admin".into(),
            admin: Credential::new("root", "12345678"),
            app_db: "products".into(),
            app_user: Credential::new("app_user", "password"),
            roles: vec![RoleGrant::read_write("products")],
            collection: "product".into(),
            on_existing: ExistingPolicy::default(),
        }
    }
}

/// Outcome of each step that ran, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub steps: Vec<(ProvisionStep, StepOutcome)>,
}

impl ProvisionReport {
    pub fn record(&mut self, step: ProvisionStep, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    #[must_use]
    pub fn outcome(&self, step: ProvisionStep) -> Option<StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| *outcome)
    }

    /// True when nothing was created because everything already existed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.outcome(ProvisionStep::CreateUser) == Some(StepOutcome::Skipped)
            && self.outcome(ProvisionStep::CreateCollection) == Some(StepOutcome::Skipped)
    }
}

/// Join grants for display, e.g. `readWrite@products, read@reports`.
#[must_use]
pub fn format_roles(roles: &[RoleGrant]) -> String {
    roles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
