use tracing::info;

/// Human-readable report surfaced through the host's build status UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// Optional heading; hosts typically fall back to the plugin name
    pub title: Option<String>,
    /// One-line outcome shown in the build summary
    pub summary: String,
    /// Longer detail text, usually naming the location involved
    pub text: Option<String>,
}

/// Best-effort reporting sink.
///
/// Fire-and-forget: callers ignore the outcome, so implementations must
/// not panic on delivery problems.
pub trait StatusSink: Send + Sync {
    fn show(&self, report: StatusReport);
}

/// Status sink that renders reports through the structured log.
///
/// Default for orchestrators without a dedicated reporting surface; hosts
/// with one supply their own [`StatusSink`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatus;

impl StatusSink for TracingStatus {
    fn show(&self, report: StatusReport) {
        info!(
            title = report.title.as_deref().unwrap_or_default(),
            detail = report.text.as_deref().unwrap_or_default(),
            "{}",
            report.summary
        );
    }
}
