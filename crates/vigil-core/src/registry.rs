use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use vigil_model::{HealthReport, HealthReportEntry};

use crate::{CheckResult, FnCheck, HealthCheck, HealthError, HealthSource};

/// Named collection of health checks.
///
/// Runs every registered probe and snapshots the results into a fresh
/// [`HealthReport`], measuring per-check wall-clock duration.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<(String, Arc<dyn HealthCheck>)>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a probe under a unique name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        check: Arc<dyn HealthCheck>,
    ) -> Result<(), HealthError> {
        let name = name.into();
        if self.checks.iter().any(|(existing, _)| *existing == name) {
            return Err(HealthError::DuplicateCheck(name));
        }
        self.checks.push((name, check));
        Ok(())
    }

    /// Register an async closure as a probe.
    pub fn register_fn<F, Fut>(&mut self, name: impl Into<String>, f: F) -> Result<(), HealthError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CheckResult> + Send + 'static,
    {
        self.register(name, Arc::new(FnCheck::new(f)))
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Execute all checks sequentially and snapshot the results.
    pub async fn run_all(&self) -> HealthReport {
        let mut entries = BTreeMap::new();
        for (name, check) in &self.checks {
            let started = Instant::now();
            let result = check.check().await;
            let duration = started.elapsed();

            if result.status.is_healthy() {
                debug!(check = %name, seconds = duration.as_secs_f64(), "health check passed");
            } else {
                warn!(
                    check = %name,
                    status = ?result.status,
                    message = result.message.as_deref().unwrap_or(""),
                    "health check reported a problem"
                );
            }

            entries.insert(
                name.clone(),
                HealthReportEntry::new(result.status, duration, result.message),
            );
        }
        HealthReport::new(entries)
    }
}

#[async_trait]
impl HealthSource for CheckRegistry {
    async fn check_health(&self) -> Result<HealthReport, HealthError> {
        Ok(self.run_all().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vigil_model::HealthStatus;

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = CheckRegistry::new();
        registry
            .register_fn("db", || async { CheckResult::healthy() })
            .unwrap();

        let err = registry
            .register_fn("db", || async { CheckResult::healthy() })
            .unwrap_err();

        assert!(matches!(err, HealthError::DuplicateCheck(name) if name == "db"));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn run_all_snapshots_every_check() {
        let mut registry = CheckRegistry::new();
        registry
            .register_fn("db", || async { CheckResult::healthy() })
            .unwrap();
        registry
            .register_fn("mq", || async { CheckResult::unhealthy("connection refused") })
            .unwrap();

        let report = registry.run_all().await;

        assert_eq!(report.len(), 2);
        assert_eq!(report.get("db").unwrap().status, HealthStatus::Healthy);
        let mq = report.get("mq").unwrap();
        assert_eq!(mq.status, HealthStatus::Unhealthy);
        assert_eq!(mq.message.as_deref(), Some("connection refused"));
        assert_eq!(report.worst_status(), HealthStatus::Unhealthy);
    }

    #[tokio::test]
    async fn durations_are_measured() {
        let mut registry = CheckRegistry::new();
        registry
            .register_fn("slow", || async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                CheckResult::healthy()
            })
            .unwrap();

        let report = registry.run_all().await;
        let entry = report.get("slow").unwrap();

        assert!(entry.duration >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn empty_registry_yields_empty_report() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());

        let report = registry.run_all().await;
        assert!(report.is_empty());
        assert_eq!(report.worst_status(), HealthStatus::Healthy);
    }
}
