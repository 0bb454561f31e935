mod status;
pub use status::HealthStatus;

mod entry;
pub use entry::HealthReportEntry;

mod report;
pub use report::HealthReport;

/// Name of a registered health check.
///
/// Names are unique within a report; the registry rejects duplicates at
/// registration time.
pub type CheckName = String;
