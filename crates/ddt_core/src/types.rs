//! Core data types for ddt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status half of a validator outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    /// The login attempt was accepted.
    Success,
    /// The login attempt was rejected.
    Failure,
}

impl OutcomeStatus {
    /// Canonical spreadsheet spelling (`SUCCESS` / `FAILURE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validator's computed (status, message) pair for a given input.
///
/// Ephemeral: produced per validation call, consumed by the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// SUCCESS or FAILURE.
    pub status: OutcomeStatus,
    /// Message the login form would show for this input.
    pub message: String,
}

impl Outcome {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Failure,
            message: message.into(),
        }
    }
}

/// One row of input test data: credentials plus expected outcome.
///
/// Parsed from a single workbook row, keyed by the header row. Missing
/// cells default to the empty string; blank id/description/category fall
/// back to row-derived defaults at parse time. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Test case identifier (`TC001`, ...).
    pub id: String,
    /// Human-readable description of the case.
    pub description: String,
    /// Username fed to the validator.
    pub username: String,
    /// Password fed to the validator.
    pub password: String,
    /// Expected status cell, compared verbatim against the actual status.
    pub expected_outcome: String,
    /// Expected message, matched as a case-insensitive substring.
    pub expected_message: String,
    /// Test category (Positive, Negative, Security, Boundary, ...).
    pub category: String,
}

impl Scenario {
    /// Compares an actual outcome against this scenario's expectations.
    pub fn check(&self, outcome: &Outcome) -> Comparison {
        let status_match = outcome.status.as_str() == self.expected_outcome;
        let message_match = outcome
            .message
            .to_lowercase()
            .contains(&self.expected_message.to_lowercase());
        Comparison {
            status_match,
            message_match,
        }
    }
}

/// Result of comparing an [`Outcome`] against a [`Scenario`]'s expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Actual status string equals the expected outcome cell.
    pub status_match: bool,
    /// Expected message occurs (case-insensitively) in the actual message.
    pub message_match: bool,
}

impl Comparison {
    /// True when both the status and the message assertions hold.
    pub fn passed(&self) -> bool {
        self.status_match && self.message_match
    }

    /// The verdict this comparison yields.
    pub fn verdict(&self) -> Verdict {
        if self.passed() {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }
}

/// Pass/fail verdict recorded for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    /// Canonical spreadsheet spelling (`PASSED` / `FAILED`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted comparison of an outcome against a scenario's expectations.
///
/// Exactly one per scenario per run; written back into the workbook's
/// result columns and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Id of the scenario this result belongs to.
    pub scenario_id: String,
    /// Status the validator actually returned.
    pub actual_status: OutcomeStatus,
    /// Message the validator actually returned.
    pub actual_message: String,
    /// PASSED or FAILED.
    pub verdict: Verdict,
    /// Assertion detail line (pass confirmation or mismatch reasons).
    pub details: String,
    /// Wall-clock `HH:MM:SS` stamp of the execution.
    pub executed_at: String,
}
