//! Database-agnostic domain types.

pub mod credential;
pub mod feed;
pub mod import;
pub mod key;
pub mod product;
pub mod provision;

pub use credential::Credential;
pub use feed::FeedProduct;
pub use import::ImportReport;
pub use product::{Product, ProductFields};
pub use provision::{
    format_roles, ExistingPolicy, ProvisionPlan, ProvisionReport, ProvisionStep, RoleGrant,
    StepOutcome, UserInfo,
};
