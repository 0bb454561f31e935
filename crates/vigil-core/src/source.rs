use async_trait::async_trait;

use vigil_model::HealthReport;

use crate::HealthError;

/// "Execute all registered checks now."
///
/// Implementations perform no caching of their own and may take arbitrary
/// time; no timeout or cancellation is imposed at this layer. The in-process
/// implementation is [`CheckRegistry`](crate::CheckRegistry).
#[async_trait]
pub trait HealthSource: Send + Sync {
    async fn check_health(&self) -> Result<HealthReport, HealthError>;
}
