use serde_json::Value;
use tracing::info;

/// Developer-facing output channel for values the chart receives.
///
/// Not a stable interface; values are passed through exactly as received.
pub trait DiagnosticSink {
    fn emit(&mut self, label: &str, value: &Value);
}

/// Writes each value as compact JSON on the `chart_canvas::diagnostics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, label: &str, value: &Value) {
        info!(target: "chart_canvas::diagnostics", label, value = %value);
    }
}

/// Keeps every emitted value; used by headless hosts and tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    pub entries: Vec<(String, Value)>,
}

impl MemorySink {
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.entries.last().map(|(_, value)| value)
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, label: &str, value: &Value) {
        self.entries.push((label.to_owned(), value.clone()));
    }
}
