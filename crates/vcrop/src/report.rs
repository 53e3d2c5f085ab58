//! Operator-facing diagnostic surface.
//!
//! `report` is fire-and-forget: it never fails and nothing in the pipeline
//! consumes its output. The default implementation forwards to `tracing`.

/// Sink for human-readable diagnostic messages.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Reporter that forwards messages to `tracing::warn!`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Reporter that records messages, for tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<String>,
}

impl RecordingReporter {
    /// True if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
