//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for configuration, provisioning,
//!   feed import and diagnostics

pub mod operator;
