use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::HealthStatus;

/// Result of one health check execution.
///
/// Produced fresh by the registry on every run; immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportEntry {
    /// Observed status.
    pub status: HealthStatus,
    /// Wall-clock time the check took, as measured by the registry.
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Optional human-readable detail reported by the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthReportEntry {
    pub fn new(status: HealthStatus, duration: Duration, message: Option<String>) -> Self {
        Self {
            status,
            duration,
            message,
        }
    }

    /// Check duration in seconds. Zero is valid (instantaneous check).
    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_serializes_as_seconds() {
        let entry = HealthReportEntry::new(
            HealthStatus::Healthy,
            Duration::from_millis(1500),
            None,
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"status":"healthy","duration":1.5}"#);

        let back: HealthReportEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, entry.status);
        assert_eq!(back.duration, entry.duration);
        assert_eq!(back.message, None);
    }

    #[test]
    fn negative_duration_rejected() {
        let err = serde_json::from_str::<HealthReportEntry>(
            r#"{"status":"healthy","duration":-0.1}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn out_of_range_duration_rejected() {
        // Finite but larger than any representable Duration; must surface
        // as a serde error, not a panic.
        let err = serde_json::from_str::<HealthReportEntry>(
            r#"{"status":"healthy","duration":1e300}"#,
        );
        assert!(err.is_err());

        let err =
            serde_json::from_str::<HealthReportEntry>(r#"{"status":"healthy","duration":null}"#);
        assert!(err.is_err());
    }

    #[test]
    fn zero_duration_is_valid() {
        let entry =
            HealthReportEntry::new(HealthStatus::Unhealthy, Duration::ZERO, Some("down".into()));
        assert_eq!(entry.duration_seconds(), 0.0);
    }
}
