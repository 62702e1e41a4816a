//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod import;
pub mod operator;
pub mod output;
pub mod provision;
