pub(crate) const STATUS_HELP: &str =
    "Health check status (0 = unhealthy, 0.5 = degraded, 1 = healthy)";

pub(crate) const DURATION_HELP: &str = "Duration of the health check execution in seconds";

/// Gauge naming for [`InstrumentationBuilder`](crate::InstrumentationBuilder).
#[derive(Debug, Clone)]
pub struct InstrumentationOptions {
    /// Metric name of the status gauge.
    pub status_gauge_name: String,
    /// Metric name of the duration gauge.
    pub duration_gauge_name: String,
}

impl Default for InstrumentationOptions {
    fn default() -> Self {
        Self {
            status_gauge_name: "healthcheck_status".to_string(),
            duration_gauge_name: "healthcheck_duration_seconds".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gauge_names() {
        let options = InstrumentationOptions::default();
        assert_eq!(options.status_gauge_name, "healthcheck_status");
        assert_eq!(options.duration_gauge_name, "healthcheck_duration_seconds");
    }
}
