//! One-shot credential validation.

use anyhow::Result;
use console::style;
use ddt_core::{Config, LoginValidator, OutcomeStatus};
use std::path::Path;

/// Validate a single credential pair against the configured store.
pub fn run(username: &str, password: &str) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let validator = LoginValidator::new(config.credential_store());

    let outcome = validator.validate(username, password);
    match outcome.status {
        OutcomeStatus::Success => {
            println!(
                "{} {} - {}",
                style("✓").green(),
                style(outcome.status).green().bold(),
                outcome.message
            );
        }
        OutcomeStatus::Failure => {
            println!(
                "{} {} - {}",
                style("✗").red(),
                style(outcome.status).red().bold(),
                outcome.message
            );
        }
    }

    Ok(())
}
