//! Operator-facing inbound ports consumed by CLI adapters.
//!
//! Requests carry the configuration as TOML text rather than a file path so
//! the contracts stay independent of where the configuration came from.

pub mod config;
pub mod diagnostic;
pub mod import;
pub mod port;
pub mod provision;
