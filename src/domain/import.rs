//! Outcome of a feed import.

use serde::Serialize;

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Entries that could not be turned into product fields.
    pub skipped: usize,
    /// Entries whose validation or write failed.
    pub failed: usize,
}

impl ImportReport {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.inserted + self.updated + self.unchanged + self.skipped + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_counts_every_disposition() {
        let report = ImportReport {
            inserted: 3,
            updated: 2,
            unchanged: 5,
            skipped: 1,
            failed: 1,
        };
        assert_eq!(report.total(), 12);
        assert_eq!(ImportReport::default().total(), 0);
    }
}
