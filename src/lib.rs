//! Stockroom - bootstrap and feed import for the product catalogue database.
//!
//! A fresh MongoDB instance only has its root login. `stockroom provision`
//! authenticates as that administrator, creates a least-privilege user scoped
//! to the application database and creates the product collection. Once the
//! instance is provisioned, `stockroom import` reads the supplier XML feed and
//! inserts or updates products as the application user.
//!
//! # Architecture
//!
//! - [`domain`] - Credentials, role grants, the provisioning plan, products
//!   and feed entries
//! - [`port`] - [`DatabaseAdmin`](port::DatabaseAdmin) and
//!   [`ProductStore`](port::ProductStore) traits
//! - [`application`] - [`Provisioner`](application::Provisioner) and
//!   [`Importer`](application::Importer) use cases
//! - [`adapter`] - MongoDB and XML feed adapters, and the CLI
//! - [`infrastructure`] - Configuration loading and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - In-memory port implementations and sample feeds for tests
//!
//! # Example
//!
//! ```no_run
//! use stockroom::infrastructure::bootstrap::build_provisioner;
//! use stockroom::infrastructure::config::settings::Config;
//!
//! # async fn run() -> stockroom::error::Result<()> {
//! let config = Config::load("stockroom.toml")?;
//! let provisioner = build_provisioner(&config);
//! let report = provisioner.run(&config.provision_plan()).await?;
//! println!("{:?}", report.steps);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
