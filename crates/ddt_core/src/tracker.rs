//! Execution tracking: per-case verdicts, counters, and the summary block.

use crate::types::Verdict;
use crate::TimeProvider;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// One recorded verdict with its detail line and timestamp.
#[derive(Debug, Clone)]
pub struct RecordedOutcome {
    /// Scenario id the verdict belongs to.
    pub id: String,
    /// PASSED or FAILED.
    pub verdict: Verdict,
    /// Detail line (pass confirmation or mismatch reasons).
    pub details: String,
    /// Unix timestamp when the verdict was recorded.
    pub timestamp: i64,
}

/// Accumulates verdicts and renders the end-of-run summary.
///
/// Construction captures the start time; `summary()` reports the elapsed
/// duration and pass rate. No failure modes.
pub struct ExecutionTracker {
    started_at: i64,
    outcomes: Vec<RecordedOutcome>,
    total: u32,
    passed: u32,
    time_provider: Option<Arc<dyn Fn() -> i64 + Send + Sync>>,
}

impl ExecutionTracker {
    /// Creates a tracker using system time.
    pub fn new() -> Self {
        Self::with_provider(None)
    }

    /// Creates a tracker with an injected time provider for testing.
    pub fn with_time_provider<P: TimeProvider + 'static>(provider: P) -> Self {
        Self::with_provider(Some(Arc::new(move || provider.now())))
    }

    pub(crate) fn with_provider(time_provider: Option<Arc<dyn Fn() -> i64 + Send + Sync>>) -> Self {
        let mut tracker = Self {
            started_at: 0,
            outcomes: Vec::new(),
            total: 0,
            passed: 0,
            time_provider,
        };
        tracker.started_at = tracker.now();
        tracker
    }

    fn now(&self) -> i64 {
        if let Some(ref provider) = self.time_provider {
            provider()
        } else {
            current_timestamp()
        }
    }

    /// Current wall-clock time rendered as `HH:MM:SS` (UTC).
    pub fn timestamp(&self) -> String {
        chrono::DateTime::from_timestamp(self.now(), 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "00:00:00".to_string())
    }

    /// Records one verdict and updates the counters.
    pub fn record(&mut self, id: &str, verdict: Verdict, details: &str) {
        self.outcomes.push(RecordedOutcome {
            id: id.to_string(),
            verdict,
            details: details.to_string(),
            timestamp: self.now(),
        });
        self.total += 1;
        if verdict.is_passed() {
            self.passed += 1;
        }
    }

    /// All recorded outcomes, in execution order.
    pub fn outcomes(&self) -> &[RecordedOutcome] {
        &self.outcomes
    }

    /// Number of verdicts recorded.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of PASSED verdicts.
    pub fn passed(&self) -> u32 {
        self.passed
    }

    /// Number of FAILED verdicts.
    pub fn failed(&self) -> u32 {
        self.total - self.passed
    }

    /// Pass rate in percent; 0.0 when nothing was recorded.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.passed) / f64::from(self.total) * 100.0
        }
    }

    /// Seconds elapsed since the tracker was constructed.
    pub fn duration_secs(&self) -> i64 {
        self.now() - self.started_at
    }

    /// Renders the formatted execution summary.
    pub fn summary(&self) -> String {
        format!(
            "Execution Duration: {:.2} seconds\n\
             Total Test Cases: {}\n\
             Passed: {}\n\
             Failed: {}\n\
             Pass Rate: {:.1}%",
            self.duration_secs() as f64,
            self.total(),
            self.passed(),
            self.failed(),
            self.pass_rate()
        )
    }
}

impl Default for ExecutionTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
