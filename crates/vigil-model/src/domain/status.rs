use serde::{Deserialize, Serialize};

/// Observed state of a single health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The probe succeeded and the component is fully operational.
    Healthy,
    /// The probe succeeded but the component is impaired.
    Degraded,
    /// The probe failed or the component is not operational.
    Unhealthy,
}

impl HealthStatus {
    /// Returns `true` if the check reported full health.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    /// Combine two statuses, keeping the more severe one.
    ///
    /// Severity order: `Unhealthy` > `Degraded` > `Healthy`.
    pub fn worse(self, other: HealthStatus) -> HealthStatus {
        match (self, other) {
            (HealthStatus::Unhealthy, _) | (_, HealthStatus::Unhealthy) => HealthStatus::Unhealthy,
            (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
            _ => HealthStatus::Healthy,
        }
    }
}
