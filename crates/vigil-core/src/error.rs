use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("health check already registered: {0}")]
    DuplicateCheck(String),
    #[error("health source failed: {0}")]
    Source(String),
}
