use std::future::Future;

use async_trait::async_trait;

use vigil_model::HealthStatus;

/// Outcome reported by a single probe run.
///
/// The registry attaches the measured duration; a probe only decides the
/// status and an optional detail message.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: HealthStatus,
    pub message: Option<String>,
}

impl CheckResult {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: None,
        }
    }

    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Degraded,
            message: Some(message.into()),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
        }
    }
}

/// A named, user-defined health probe.
///
/// Implementations should report failure as [`CheckResult::unhealthy`]
/// rather than panicking; the registry does not catch panics.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> CheckResult;
}

/// Adapts an async closure into a [`HealthCheck`].
///
/// Used by [`CheckRegistry::register_fn`](crate::CheckRegistry::register_fn).
pub struct FnCheck<F> {
    f: F,
}

impl<F> FnCheck<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> HealthCheck for FnCheck<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = CheckResult> + Send,
{
    async fn check(&self) -> CheckResult {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_status() {
        assert_eq!(CheckResult::healthy().status, HealthStatus::Healthy);
        assert!(CheckResult::healthy().message.is_none());

        let degraded = CheckResult::degraded("slow");
        assert_eq!(degraded.status, HealthStatus::Degraded);
        assert_eq!(degraded.message.as_deref(), Some("slow"));

        let unhealthy = CheckResult::unhealthy("down");
        assert_eq!(unhealthy.status, HealthStatus::Unhealthy);
        assert_eq!(unhealthy.message.as_deref(), Some("down"));
    }

    #[tokio::test]
    async fn fn_check_delegates_to_closure() {
        let check = FnCheck::new(|| async { CheckResult::degraded("half up") });
        let result = check.check().await;

        assert_eq!(result.status, HealthStatus::Degraded);
        assert_eq!(result.message.as_deref(), Some("half up"));
    }
}
