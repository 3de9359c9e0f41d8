//! Diagnostic Sink
//!
//! Fire-and-forget logging boundary for the navigation core. The
//! production sink forwards to the `tracing` subscriber installed at
//! startup; tests inject a recording sink instead.

/// Leveled, fire-and-forget diagnostics
pub trait DiagnosticSink {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
