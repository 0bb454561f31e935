use std::sync::Arc;

use vigil_model::{HealthReport, HealthReportEntry};

use crate::{HealthError, HealthSource};

/// Serves multiple gauge callbacks from a single health-check execution.
///
/// Pull-model gauge callbacks run back-to-back within one collection pass.
/// Executing the checks once per callback would double the cost of every
/// pass, so the cache alternates between "recompute" and "serve cached":
/// the first call of each pair executes the source and stores the report,
/// the second call reuses that report and rearms the cache.
///
/// The pairing is a best-effort optimization, agnostic to call order and
/// count. It guarantees at most one execution per two calls; it does not
/// verify how many callbacks share the cache, so registering more than two
/// streams against one instance yields stale pairs rather than errors.
pub struct ReportCache {
    source: Arc<dyn HealthSource>,
    last_report: Option<HealthReport>,
    use_cached: bool,
}

impl ReportCache {
    pub fn new(source: Arc<dyn HealthSource>) -> Self {
        Self {
            source,
            last_report: None,
            use_cached: false,
        }
    }

    /// Produce one extracted value per entry of the current report.
    ///
    /// Executes the source when the cache is not armed (or no report has
    /// ever been stored), blocking the caller until the execution
    /// completes; otherwise serves the previous report and rearms.
    ///
    /// A source failure propagates without touching the cached report or
    /// the flag: the store-then-arm step only happens on success, so the
    /// next call executes again.
    pub async fn observe<T, F>(&mut self, extract: F) -> Result<Vec<T>, HealthError>
    where
        F: Fn(&str, &HealthReportEntry) -> T,
    {
        if self.use_cached && let Some(report) = &self.last_report {
            self.use_cached = false;
            return Ok(collect(report, &extract));
        }

        let fresh = self.source.check_health().await?;
        self.use_cached = true;
        let report = self.last_report.insert(fresh);
        Ok(collect(report, &extract))
    }
}

fn collect<T, F>(report: &HealthReport, extract: &F) -> Vec<T>
where
    F: Fn(&str, &HealthReportEntry) -> T,
{
    report
        .iter()
        .map(|(name, entry)| extract(name, entry))
        .collect()
}
