//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`admin`] - In-memory [`DatabaseAdmin`](crate::port::DatabaseAdmin) that
//!   records every call.
//! - [`store`] - In-memory [`ProductStore`](crate::port::ProductStore).
//! - [`feed`] - Sample supplier feed documents.

pub mod admin;
pub mod feed;
pub mod store;
