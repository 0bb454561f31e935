use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("no health source configured")]
    MissingSource,
    #[error("no tokio runtime handle available: register from within a runtime or pass one explicitly")]
    NoRuntime,
    #[error("current-thread runtime not supported: scrapes block on check execution, use a multi-thread runtime")]
    CurrentThreadRuntime,
    #[error("gauge registration failed: {0}")]
    Prometheus(#[from] prometheus::Error),
}
