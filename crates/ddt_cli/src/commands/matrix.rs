//! Browser matrix inspection.

use anyhow::Result;
use console::style;
use ddt_core::Config;
use std::path::Path;

/// Print the configured cross-browser matrix.
pub fn run(format: &str) -> Result<()> {
    let config = Config::load(Path::new("."))?;

    match format {
        "json" => {
            let docs: Vec<serde_json::Value> = config
                .grid
                .browsers
                .iter()
                .map(|browser| {
                    serde_json::json!({
                        "name": browser.name,
                        "capabilities": browser.capabilities(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        "text" => {
            println!("{}", style("Browser matrix:").bold());
            for browser in &config.grid.browsers {
                println!(
                    "  {} {} ({}) on {} {}",
                    style("•").cyan(),
                    style(&browser.browser_name).bold(),
                    browser.browser_version,
                    browser.os,
                    browser.os_version
                );
                println!("      Session: {}", browser.session_name);
                println!("      Build:   {}", browser.build_name);
            }
            println!();
            if config.grid.is_configured() {
                println!(
                    "Grid account: {} {}",
                    style(&config.grid.username).cyan(),
                    style("(access key set)").green()
                );
            } else {
                println!(
                    "Grid account: {} - set [grid] username and access_key in ddt.toml",
                    style("not configured").yellow()
                );
            }
        }
        other => anyhow::bail!("unknown format: {} (expected 'text' or 'json')", other),
    }

    Ok(())
}
