use std::sync::Arc;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{GaugeVec, Opts};
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tracing::warn;

use vigil_core::ReportCache;
use vigil_model::{HealthReportEntry, HealthStatus};

use crate::options::{DURATION_HELP, STATUS_HELP};
use crate::runtime::block_on_scrape;

pub(crate) type SharedCache = Arc<Mutex<ReportCache>>;

/// Gauge value of a status: 1 healthy, 0.5 degraded, 0 unhealthy.
///
/// The match is total; a status without a defined value cannot be
/// constructed.
pub(crate) fn status_value(status: HealthStatus) -> f64 {
    match status {
        HealthStatus::Unhealthy => 0.0,
        HealthStatus::Degraded => 0.5,
        HealthStatus::Healthy => 1.0,
    }
}

/// Pull-model gauge backed by the shared report cache.
///
/// One instance per gauge; the status and duration instances hold the same
/// cache, which pairs their back-to-back `collect` calls into a single
/// check execution per scrape.
pub(crate) struct HealthGaugeCollector {
    cache: SharedCache,
    handle: Handle,
    gauge: GaugeVec,
    value: fn(&HealthReportEntry) -> f64,
}

impl HealthGaugeCollector {
    pub(crate) fn status(
        cache: SharedCache,
        handle: Handle,
        name: &str,
    ) -> Result<Self, prometheus::Error> {
        Self::new(cache, handle, name, STATUS_HELP, |entry| {
            status_value(entry.status)
        })
    }

    pub(crate) fn duration(
        cache: SharedCache,
        handle: Handle,
        name: &str,
    ) -> Result<Self, prometheus::Error> {
        Self::new(cache, handle, name, DURATION_HELP, |entry| {
            entry.duration_seconds()
        })
    }

    fn new(
        cache: SharedCache,
        handle: Handle,
        name: &str,
        help: &str,
        value: fn(&HealthReportEntry) -> f64,
    ) -> Result<Self, prometheus::Error> {
        let gauge = GaugeVec::new(Opts::new(name, help), &["name"])?;
        Ok(Self {
            cache,
            handle,
            gauge,
            value,
        })
    }
}

impl Collector for HealthGaugeCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauge.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let value = self.value;
        let samples = block_on_scrape(&self.handle, async {
            let mut cache = self.cache.lock().await;
            cache
                .observe(|name, entry| (name.to_string(), value(entry)))
                .await
        });

        let samples = match samples {
            Ok(samples) => samples,
            Err(err) => {
                // The pull model has no error channel; skip this scrape and
                // let the next one retry.
                warn!(error = %err, "health check execution failed, no samples this scrape");
                return Vec::new();
            }
        };

        self.gauge.reset();
        for (name, value) in &samples {
            self.gauge.with_label_values(&[name.as_str()]).set(*value);
        }
        self.gauge.collect()
    }
}
