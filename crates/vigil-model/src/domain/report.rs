use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{CheckName, HealthReportEntry, HealthStatus};

/// Snapshot produced by one execution of all registered health checks.
///
/// A report is never merged or patched; each execution supersedes the
/// previous report wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthReport {
    entries: BTreeMap<CheckName, HealthReportEntry>,
}

impl HealthReport {
    pub fn new(entries: BTreeMap<CheckName, HealthReportEntry>) -> Self {
        Self { entries }
    }

    /// Iterate entries by check name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HealthReportEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Look up a single entry by check name.
    pub fn get(&self, name: &str) -> Option<&HealthReportEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate status across all entries.
    ///
    /// `Unhealthy` dominates `Degraded`, which dominates `Healthy`.
    /// An empty report is `Healthy`.
    pub fn worst_status(&self) -> HealthStatus {
        self.entries
            .values()
            .fold(HealthStatus::Healthy, |acc, entry| acc.worse(entry.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn entry(status: HealthStatus) -> HealthReportEntry {
        HealthReportEntry::new(status, Duration::from_millis(10), None)
    }

    fn report(pairs: &[(&str, HealthStatus)]) -> HealthReport {
        let entries = pairs
            .iter()
            .map(|(name, status)| (name.to_string(), entry(*status)))
            .collect();
        HealthReport::new(entries)
    }

    #[test]
    fn worst_status_aggregation() {
        assert_eq!(report(&[]).worst_status(), HealthStatus::Healthy);
        assert_eq!(
            report(&[("a", HealthStatus::Healthy)]).worst_status(),
            HealthStatus::Healthy
        );
        assert_eq!(
            report(&[("a", HealthStatus::Healthy), ("b", HealthStatus::Degraded)]).worst_status(),
            HealthStatus::Degraded
        );
        assert_eq!(
            report(&[
                ("a", HealthStatus::Degraded),
                ("b", HealthStatus::Unhealthy),
                ("c", HealthStatus::Healthy),
            ])
            .worst_status(),
            HealthStatus::Unhealthy
        );
    }

    #[test]
    fn lookup_and_iteration() {
        let report = report(&[("db", HealthStatus::Healthy), ("mq", HealthStatus::Degraded)]);

        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
        assert_eq!(report.get("db").unwrap().status, HealthStatus::Healthy);
        assert!(report.get("missing").is_none());

        let names: Vec<&str> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["db", "mq"]);
    }

    #[test]
    fn serde_roundtrip() {
        let report = report(&[("db", HealthStatus::Unhealthy)]);
        let json = serde_json::to_string(&report).unwrap();
        let back: HealthReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.get("db").unwrap().status, HealthStatus::Unhealthy);
    }
}
