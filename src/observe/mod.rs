use std::sync::Mutex;

use chrono::Utc;

use crate::indicators::RiskLevel;

/// Sink for per-invocation scoring records.
///
/// Constructed once at startup and passed by reference to whoever calls
/// the scorer. Implementations must be append-only so concurrent callers
/// need no coordination beyond the sink's own interior locking.
pub trait AssessmentLog: Send + Sync {
    fn record_success(&self, region: &str, score: f64, level: RiskLevel);
    fn record_failure(&self, message: &str, context: &[(&str, &str)]);
}

/// Writes one timestamped line per invocation to stderr.
pub struct StderrLog;

impl AssessmentLog for StderrLog {
    fn record_success(&self, region: &str, score: f64, level: RiskLevel) {
        eprintln!(
            "{} INFO Prediction made for {} - Risk Score: {:.2}, Risk Level: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            region,
            score,
            level
        );
    }

    fn record_failure(&self, message: &str, context: &[(&str, &str)]) {
        eprintln!(
            "{} ERROR {} ({})",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            message,
            format_context(context)
        );
    }
}

/// Collects records in memory instead of writing them out. Used by tests
/// and by embedders that want to inspect records after the fact.
#[derive(Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all collected records, in insertion order.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut self.entries.lock().unwrap())
    }
}

impl AssessmentLog for MemoryLog {
    fn record_success(&self, region: &str, score: f64, level: RiskLevel) {
        self.entries.lock().unwrap().push(format!(
            "success region={} score={:.2} level={}",
            region, score, level
        ));
    }

    fn record_failure(&self, message: &str, context: &[(&str, &str)]) {
        self.entries
            .lock()
            .unwrap()
            .push(format!("failure {} ({})", message, format_context(context)));
    }
}

fn format_context(context: &[(&str, &str)]) -> String {
    context
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}
