//! DDT Core Library
//!
//! A data-driven test harness for a simulated login form, providing:
//! - A pure, rule-ordered login validator over an injectable credential store
//! - A workbook-backed scenario provider (read rows, write verdicts back)
//! - Execution tracking with duration and pass-rate reporting
//! - A single-pass engine orchestrating the three
//!
//! # Quick Start
//!
//! ```
//! use ddt_core::{LoginValidator, MemoryCredentialStore, OutcomeStatus};
//!
//! let validator = LoginValidator::new(MemoryCredentialStore::practice_default());
//!
//! let outcome = validator.validate("student", "Password123");
//! assert_eq!(outcome.status, OutcomeStatus::Success);
//! assert_eq!(outcome.message, "Logged In Successfully");
//!
//! // Leading/trailing whitespace is rejected before the lookup.
//! let outcome = validator.validate("student ", "Password123");
//! assert_eq!(outcome.status, OutcomeStatus::Failure);
//! ```
//!
//! # Running a suite
//!
//! Scenarios live in an xlsx sheet; the engine reads them, validates each
//! one, and writes the verdict columns back into the same file:
//!
//! ```
//! use ddt_core::{dataset, MemoryCredentialStore, TestEngine};
//! use tempfile::TempDir;
//!
//! let tmp = TempDir::new().unwrap();
//! let path = tmp.path().join("test_data.xlsx");
//! dataset::write_dataset(&path, "LoginTestScenarios", &dataset::default_dataset()).unwrap();
//!
//! let engine = TestEngine::new(MemoryCredentialStore::practice_default());
//! let report = engine.run(&path, "LoginTestScenarios").unwrap();
//! assert_eq!(report.total, 15);
//! assert!(!report.has_failures());
//! ```

mod config;
mod credentials;
mod engine;
mod error;
mod tracker;
mod types;
mod validator;
mod workbook;

pub mod dataset;

pub use config::{
    BrowserConfig, Config, CredentialPair, DataConfig, GridConfig, CONFIG_FILE,
};
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use engine::{SuiteReport, TestEngine};
pub use error::{DdtError, Result};
pub use tracker::{ExecutionTracker, RecordedOutcome};
pub use types::{CaseResult, Comparison, Outcome, OutcomeStatus, Scenario, Verdict};
pub use validator::{
    LoginValidator, DANGEROUS_PATTERNS, MAX_FIELD_LEN, MSG_INVALID_PASSWORD,
    MSG_INVALID_USERNAME, MSG_LOGGED_IN,
};
pub use workbook::{WorkbookProvider, RESULT_COLUMNS};

/// Time provider trait for testing.
///
/// Allows injecting controlled time into the tracker and engine so tests
/// can pin execution stamps and durations. Production code leaves it unset
/// and uses system time.
pub trait TimeProvider: Send + Sync {
    /// Returns the current Unix timestamp in seconds.
    fn now(&self) -> i64;
}

impl<F> TimeProvider for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now(&self) -> i64 {
        self()
    }
}
