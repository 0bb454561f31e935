mod error;
pub use error::HealthError;

mod check;
pub use check::{CheckResult, FnCheck, HealthCheck};

mod registry;
pub use registry::CheckRegistry;

mod source;
pub use source::HealthSource;

mod cache;
pub use cache::ReportCache;
