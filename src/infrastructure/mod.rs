//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring config to adapters
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - Inbound operator ports backed by the configuration file

pub mod bootstrap;
pub mod config;
pub mod operator;
