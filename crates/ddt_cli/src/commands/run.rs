//! Suite execution command.

use anyhow::Result;
use console::style;
use ddt_core::{Config, SuiteReport, TestEngine};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute the suite and write results back into the workbook.
pub fn run(data: Option<PathBuf>, sheet: Option<String>, json: bool) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let data = data.unwrap_or(config.data.file.clone());
    let sheet = sheet.unwrap_or(config.data.sheet.clone());
    debug!(data = %data.display(), sheet = %sheet, "resolved suite inputs");

    let engine = TestEngine::new(config.credential_store());

    if json {
        let report = engine.run(&data, &sheet)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return fail_on_failures(&report);
    }

    println!("{}", style("Data-driven login suite").bold());
    println!("  Workbook: {}", style(data.display()).cyan());
    println!("  Sheet:    {}", style(&sheet).cyan());
    println!();

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg:10} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );

    let pb_clone = pb.clone();
    let outcome = engine.run_with_progress(&data, &sheet, &move |current, total, result| {
        pb_clone.set_length(total as u64);
        pb_clone.set_position(current as u64);
        pb_clone.set_message(result.scenario_id.clone());
        let symbol = if result.verdict.is_passed() {
            style("✓").green()
        } else {
            style("✗").red()
        };
        pb_clone.println(format!(
            "  {} {:<10} {}",
            symbol, result.scenario_id, result.details
        ));
    });

    pb.finish_and_clear();

    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            if let Some(hint) = e.recovery_suggestion() {
                eprintln!("{} {}", style("→").cyan(), hint);
            }
            return Err(e.into());
        }
    };

    if report.is_empty() {
        println!(
            "{} No test scenarios found in the workbook.",
            style("⚠").yellow()
        );
        return Ok(());
    }

    println!();
    println!("{}", style("Execution Summary:").bold());
    for line in report.summary.lines() {
        println!("  {}", line);
    }

    println!();
    if report.has_failures() {
        println!("{}", style("Failed cases:").red().bold());
        for result in report.results.iter().filter(|r| !r.verdict.is_passed()) {
            println!(
                "  {} {:<10} {}",
                style("✗").red(),
                result.scenario_id,
                result.details
            );
        }
        println!();
    } else {
        println!(
            "{} All {} scenarios passed",
            style("✓").green(),
            report.total
        );
    }

    fail_on_failures(&report)
}

fn fail_on_failures(report: &SuiteReport) -> Result<()> {
    if report.has_failures() {
        anyhow::bail!("{} of {} scenarios failed", report.failed, report.total);
    }
    Ok(())
}
