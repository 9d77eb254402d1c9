//! Shared capture logger for integration tests
//!
//! The logger is process-global: every test using it must be #[serial].

use galaxy_3d_culling::galaxy3d::Engine;
use galaxy_3d_culling::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};

/// Test logger that captures log entries for verification
pub struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Install a fresh capture logger (all severities) and return its entries
pub fn install() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });
    Engine::set_min_severity(LogSeverity::Trace);
    entries
}

/// Restore the default logger and severity filter
pub fn uninstall() {
    Engine::reset_logger();
    Engine::set_min_severity(Engine::DEFAULT_MIN_SEVERITY);
}

/// Captured entries of one severity
#[allow(dead_code)]
pub fn with_severity(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<LogEntry> {
    entries.lock().unwrap()
        .iter()
        .filter(|entry| entry.severity == severity)
        .cloned()
        .collect()
}
