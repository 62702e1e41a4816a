//! Outbound adapters (driven side).

pub mod feed;
pub mod mongo;
