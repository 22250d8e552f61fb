use std::sync::Arc;

use mdc_logger::{ContextMap, Logger, Severity};
use parking_lot::Mutex;

/// A record as seen by the wrapped sink, with the context serialized for
/// structural assertions.
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub message: String,
    pub context: serde_json::Value,
}

/// A sink that captures every forwarded record for later inspection.
///
/// Clones share the same buffer, so tests can keep one handle and hand the
/// other to the decorator under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str, context: ContextMap) {
        let context = serde_json::to_value(&context).expect("log context should serialize");
        self.records.lock().push(CapturedRecord {
            severity,
            message: message.to_owned(),
            context,
        });
    }
}
