//! Operator entry point installed by the binary.

/// Operator backed by the configuration file and the MongoDB adapters.
///
/// Stateless: every call parses the configuration it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
