//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the database's administrative interface and
//! the product collection.

pub mod admin;
pub mod store;
