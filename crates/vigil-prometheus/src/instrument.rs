use std::sync::Arc;

use prometheus::Registry;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::Mutex;
use tracing::info;

use vigil_core::{HealthSource, ReportCache};

use crate::collector::HealthGaugeCollector;
use crate::{InstrumentError, InstrumentationOptions};

/// Registers the status and duration gauges against a [`Registry`].
///
/// Both gauges share one [`ReportCache`] owned by the collectors, so one
/// scrape triggers one health-check execution.
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use vigil_core::CheckRegistry;
/// # use vigil_prometheus::{InstrumentationBuilder, Registry};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = Registry::new();
/// InstrumentationBuilder::new()
///     .with_source(Arc::new(CheckRegistry::new()))
///     .configure(|options| options.status_gauge_name = "myapp_health".to_string())
///     .register(&registry)?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct InstrumentationBuilder {
    source: Option<Arc<dyn HealthSource>>,
    options: InstrumentationOptions,
    handle: Option<Handle>,
}

impl InstrumentationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Health source the gauges observe. Required.
    pub fn with_source(mut self, source: Arc<dyn HealthSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Adjust gauge names in place.
    pub fn configure(mut self, f: impl FnOnce(&mut InstrumentationOptions)) -> Self {
        f(&mut self.options);
        self
    }

    /// Runtime used to await check executions during a scrape.
    ///
    /// Defaults to the runtime current at [`register`](Self::register)
    /// time. Must belong to a multi-thread runtime; registration rejects
    /// current-thread handles.
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Create the shared report cache and register both gauge collectors.
    ///
    /// Fails fast with [`InstrumentError::MissingSource`] when no source
    /// was supplied, before any collection runs.
    pub fn register(self, registry: &Registry) -> Result<(), InstrumentError> {
        let source = self.source.ok_or(InstrumentError::MissingSource)?;
        let handle = match self.handle {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| InstrumentError::NoRuntime)?,
        };
        // The scrape bridge hands the worker off via block_in_place, which
        // a current-thread runtime cannot do; fail here rather than at the
        // first scrape.
        if matches!(handle.runtime_flavor(), RuntimeFlavor::CurrentThread) {
            return Err(InstrumentError::CurrentThreadRuntime);
        }

        let cache = Arc::new(Mutex::new(ReportCache::new(source)));

        let status = HealthGaugeCollector::status(
            Arc::clone(&cache),
            handle.clone(),
            &self.options.status_gauge_name,
        )?;
        let duration =
            HealthGaugeCollector::duration(cache, handle, &self.options.duration_gauge_name)?;

        registry.register(Box::new(status))?;
        registry.register(Box::new(duration))?;

        info!(
            status = %self.options.status_gauge_name,
            duration = %self.options.duration_gauge_name,
            "health gauges registered"
        );
        Ok(())
    }
}
