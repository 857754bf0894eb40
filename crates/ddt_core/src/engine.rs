//! Data-driven test engine: provider → validator → tracker → write-back.

use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::tracker::ExecutionTracker;
use crate::types::{CaseResult, Scenario};
use crate::validator::LoginValidator;
use crate::workbook::WorkbookProvider;
use crate::TimeProvider;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Aggregate report of one suite run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// One entry per scenario, in sheet order.
    pub results: Vec<CaseResult>,
    /// Number of scenarios executed.
    pub total: u32,
    /// Number of PASSED verdicts.
    pub passed: u32,
    /// Number of FAILED verdicts.
    pub failed: u32,
    /// Pass rate in percent.
    pub pass_rate: f64,
    /// Wall-clock duration of the run in seconds.
    pub duration_secs: i64,
    /// Rendered execution summary block.
    pub summary: String,
}

impl SuiteReport {
    /// True when the sheet held no scenarios (nothing ran, nothing written).
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when at least one scenario failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// The test execution engine.
///
/// Orchestration only: a single sequential pass over the scenario sheet,
/// no retries, no parallelism. Each run opens the provider fresh, so one
/// engine can execute several suites.
pub struct TestEngine<S> {
    validator: LoginValidator<S>,
    time_provider: Option<Arc<dyn Fn() -> i64 + Send + Sync>>,
}

impl<S: CredentialStore> TestEngine<S> {
    /// Creates an engine whose validator runs against the given store.
    pub fn new(store: S) -> Self {
        Self {
            validator: LoginValidator::new(store),
            time_provider: None,
        }
    }

    /// Injects a controlled clock (testing).
    pub fn with_time_provider<P: TimeProvider + 'static>(mut self, provider: P) -> Self {
        self.time_provider = Some(Arc::new(move || provider.now()));
        self
    }

    /// Runs the complete suite against one workbook sheet.
    pub fn run(&self, data: impl AsRef<Path>, sheet: &str) -> Result<SuiteReport> {
        self.run_with_progress(data, sheet, &|_, _, _| {})
    }

    /// Runs the suite, reporting each finished case to `on_case` as
    /// `(case number, total, result)`.
    pub fn run_with_progress(
        &self,
        data: impl AsRef<Path>,
        sheet: &str,
        on_case: &dyn Fn(usize, usize, &CaseResult),
    ) -> Result<SuiteReport> {
        let mut provider = WorkbookProvider::open(data, sheet)?;
        let mut tracker = ExecutionTracker::with_provider(self.time_provider.clone());

        let scenarios = provider.scenarios()?;
        if scenarios.is_empty() {
            warn!(sheet, "no scenarios found, nothing to execute");
            return Ok(Self::report(&tracker, Vec::new()));
        }

        info!(count = scenarios.len(), sheet, "executing suite");
        let total = scenarios.len();
        let mut results = Vec::with_capacity(total);
        for (index, scenario) in scenarios.iter().enumerate() {
            let result = self.run_case(&mut tracker, scenario);
            on_case(index + 1, total, &result);
            results.push(result);
        }

        provider.write_results(&results)?;
        Ok(Self::report(&tracker, results))
    }

    fn run_case(&self, tracker: &mut ExecutionTracker, scenario: &Scenario) -> CaseResult {
        let outcome = self
            .validator
            .validate(&scenario.username, &scenario.password);
        let comparison = scenario.check(&outcome);
        let executed_at = tracker.timestamp();

        let details = if comparison.passed() {
            format!("All assertions passed | {}", executed_at)
        } else {
            let mut reasons = Vec::new();
            if !comparison.status_match {
                reasons.push(format!(
                    "Status mismatch (expected {}, got {})",
                    scenario.expected_outcome, outcome.status
                ));
            }
            if !comparison.message_match {
                reasons.push(format!(
                    "Message mismatch (expected '{}', got '{}')",
                    scenario.expected_message, outcome.message
                ));
            }
            reasons.join(" | ")
        };

        let verdict = comparison.verdict();
        tracker.record(&scenario.id, verdict, &details);

        CaseResult {
            scenario_id: scenario.id.clone(),
            actual_status: outcome.status,
            actual_message: outcome.message,
            verdict,
            details,
            executed_at,
        }
    }

    fn report(tracker: &ExecutionTracker, results: Vec<CaseResult>) -> SuiteReport {
        SuiteReport {
            total: tracker.total(),
            passed: tracker.passed(),
            failed: tracker.failed(),
            pass_rate: tracker.pass_rate(),
            duration_secs: tracker.duration_secs(),
            summary: tracker.summary(),
            results,
        }
    }
}
