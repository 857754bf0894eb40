use super::assertions::Assertion;
use super::clock::MockClock;
use super::steps::ScenarioStep;
use super::workspace::TestWorkspace;
use super::SHEET;
use anyhow::{anyhow, Context, Result};
use ddt_core::{
    dataset, MemoryCredentialStore, SuiteReport, TestEngine, WorkbookProvider, RESULT_COLUMNS,
};

/// Executes scenarios against the real engine and a real workbook
pub struct ScenarioRunner {
    workspace: TestWorkspace,
    clock: MockClock,
    credentials: Vec<(String, String)>,
    report: Option<SuiteReport>,
    current_step: usize,
}

impl ScenarioRunner {
    /// Create a new runner with the credential pairs the validator accepts
    pub fn new(credentials: Vec<(String, String)>) -> Result<Self> {
        Ok(Self {
            workspace: TestWorkspace::empty()?,
            clock: MockClock::default(),
            credentials,
            report: None,
            current_step: 0,
        })
    }

    /// Get current step number
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Execute all steps in sequence
    pub fn execute(&mut self, steps: &[ScenarioStep]) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            self.current_step = i;
            self.execute_step(step)
                .with_context(|| format!("Step {}: {:?}", i, step))?;
        }
        Ok(())
    }

    fn execute_step(&mut self, step: &ScenarioStep) -> Result<()> {
        match step {
            ScenarioStep::SeedCases { cases } => {
                dataset::write_dataset(self.workspace.workbook_path(), SHEET, cases)?;
                Ok(())
            }
            ScenarioStep::SeedRawSheet { sheet_name, rows } => {
                self.workspace.write_raw_sheet(sheet_name, rows)
            }
            ScenarioStep::RemoveWorkbook => self.workspace.remove_workbook(),

            ScenarioStep::RunSuite => self.handle_run(),
            ScenarioStep::RunSuiteExpectError { message_contains } => {
                self.handle_run_expect_error(message_contains)
            }

            ScenarioStep::AdvanceSecs { secs } => {
                self.clock.advance_secs(*secs);
                Ok(())
            }

            ScenarioStep::Assert { assertion } => self.handle_assertion(assertion),
        }
    }

    // ===== Engine runs =====

    fn engine(&self) -> TestEngine<MemoryCredentialStore> {
        let store: MemoryCredentialStore = self
            .credentials
            .iter()
            .map(|(username, password)| (username.clone(), password.clone()))
            .collect();
        TestEngine::new(store).with_time_provider(self.clock.as_provider())
    }

    fn handle_run(&mut self) -> Result<()> {
        let report = self.engine().run(self.workspace.workbook_path(), SHEET)?;
        self.report = Some(report);
        Ok(())
    }

    fn handle_run_expect_error(&mut self, contains: &str) -> Result<()> {
        match self.engine().run(self.workspace.workbook_path(), SHEET) {
            Ok(_) => Err(anyhow!("Expected suite run to fail, but it succeeded")),
            Err(e) => {
                let message = e.to_string();
                if message.contains(contains) {
                    Ok(())
                } else {
                    Err(anyhow!(
                        "Error message mismatch: expected '{}' in '{}'",
                        contains,
                        message
                    ))
                }
            }
        }
    }

    // ===== Assertions =====

    fn provider(&self) -> Result<WorkbookProvider> {
        Ok(WorkbookProvider::open(
            self.workspace.workbook_path(),
            SHEET,
        )?)
    }

    fn report(&self) -> Result<&SuiteReport> {
        self.report
            .as_ref()
            .ok_or_else(|| anyhow!("No suite run has been executed yet"))
    }

    fn handle_assertion(&self, assertion: &Assertion) -> Result<()> {
        match assertion {
            Assertion::RowCount(expected) => {
                let count = self.provider()?.row_count()?;
                if count != *expected {
                    return Err(anyhow!("Row count mismatch: expected {expected}, got {count}"));
                }
                Ok(())
            }
            Assertion::HeaderCount(expected) => {
                let provider = self.provider()?;
                let mut count = 0;
                for col in 1..=64u32 {
                    if !provider.cell_value(col, 1)?.is_empty() {
                        count += 1;
                    }
                }
                if count != *expected {
                    return Err(anyhow!(
                        "Header count mismatch: expected {expected}, got {count}"
                    ));
                }
                Ok(())
            }
            Assertion::ResultColumnsPresent => {
                let provider = self.provider()?;
                for name in RESULT_COLUMNS {
                    if provider.header_position(name)?.is_none() {
                        return Err(anyhow!("Result column '{}' missing", name));
                    }
                }
                Ok(())
            }
            Assertion::NoResultColumns => {
                let provider = self.provider()?;
                for name in RESULT_COLUMNS {
                    if provider.header_position(name)?.is_some() {
                        return Err(anyhow!("Result column '{}' unexpectedly present", name));
                    }
                }
                Ok(())
            }
            Assertion::RowVerdict { id, verdict } => {
                let provider = self.provider()?;
                let row = find_row(&provider, id)?;
                let col = header_column(&provider, "TestResult")?;
                let actual = provider.cell_value(col, row)?;
                if actual != verdict.as_str() {
                    return Err(anyhow!(
                        "Verdict mismatch for {}: expected {}, got '{}'",
                        id,
                        verdict,
                        actual
                    ));
                }
                Ok(())
            }
            Assertion::RowActual {
                id,
                status,
                message_contains,
            } => {
                let provider = self.provider()?;
                let row = find_row(&provider, id)?;
                let status_col = header_column(&provider, "ActualOutcome")?;
                let message_col = header_column(&provider, "ActualMessage")?;

                let actual_status = provider.cell_value(status_col, row)?;
                if &actual_status != status {
                    return Err(anyhow!(
                        "ActualOutcome mismatch for {}: expected {}, got '{}'",
                        id,
                        status,
                        actual_status
                    ));
                }
                let actual_message = provider.cell_value(message_col, row)?;
                if !actual_message.contains(message_contains.as_str()) {
                    return Err(anyhow!(
                        "ActualMessage for {} doesn't contain '{}': '{}'",
                        id,
                        message_contains,
                        actual_message
                    ));
                }
                Ok(())
            }
            Assertion::ExecutionStamp { id, stamp } => {
                let provider = self.provider()?;
                let row = find_row(&provider, id)?;
                let col = header_column(&provider, "ExecutionTime")?;
                let actual = provider.cell_value(col, row)?;
                if &actual != stamp {
                    return Err(anyhow!(
                        "ExecutionTime mismatch for {}: expected {}, got '{}'",
                        id,
                        stamp,
                        actual
                    ));
                }
                Ok(())
            }
            Assertion::ReportTotals { passed, failed } => {
                let report = self.report()?;
                if report.passed != *passed || report.failed != *failed {
                    return Err(anyhow!(
                        "Report totals mismatch: expected {}/{} passed/failed, got {}/{}",
                        passed,
                        failed,
                        report.passed,
                        report.failed
                    ));
                }
                Ok(())
            }
            Assertion::ReportEmpty => {
                let report = self.report()?;
                if !report.is_empty() {
                    return Err(anyhow!(
                        "Expected empty report, got {} results",
                        report.results.len()
                    ));
                }
                Ok(())
            }
            Assertion::ReportDurationSecs(expected) => {
                let report = self.report()?;
                if report.duration_secs != *expected {
                    return Err(anyhow!(
                        "Duration mismatch: expected {}s, got {}s",
                        expected,
                        report.duration_secs
                    ));
                }
                Ok(())
            }
            Assertion::SummaryContains(text) => {
                let report = self.report()?;
                if !report.summary.contains(text.as_str()) {
                    return Err(anyhow!(
                        "Summary doesn't contain '{}': {}",
                        text,
                        report.summary
                    ));
                }
                Ok(())
            }
        }
    }
}

// ===== Helper lookups =====

fn find_row(provider: &WorkbookProvider, id: &str) -> Result<u32> {
    let last_row = provider.row_count()? + 1;
    for row in 2..=last_row {
        if provider.cell_value(1, row)? == id {
            return Ok(row);
        }
    }
    Err(anyhow!("No row with TestCaseID '{}'", id))
}

fn header_column(provider: &WorkbookProvider, name: &str) -> Result<u32> {
    provider
        .header_position(name)?
        .ok_or_else(|| anyhow!("Header '{}' not found", name))
}
