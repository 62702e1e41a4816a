//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::diagnostic::DiagnosticOperator;
use super::import::ImportOperator;
use super::provision::ProvisionOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort:
    ConfigurationOperator + DiagnosticOperator + ImportOperator + ProvisionOperator
{
}

impl<T> OperatorPort for T where
    T: ConfigurationOperator + DiagnosticOperator + ImportOperator + ProvisionOperator
{
}
