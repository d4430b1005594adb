use rosestock_core::{DiagnosticSink, FailureRecord};

/// Forwards failure records to `tracing` as structured error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str, details: &FailureRecord) {
        ::tracing::error!(
            category = %details.category,
            days_remaining = details.days_remaining,
            quality = details.quality,
            cause = %details.cause,
            "{message}"
        );
    }
}
