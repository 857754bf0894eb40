//! Write a default configuration file.

use anyhow::Result;
use console::style;
use ddt_core::{Config, CONFIG_FILE};
use std::path::Path;

/// Write a default `ddt.toml` to the current directory.
pub fn run(force: bool) -> Result<()> {
    let dir = Path::new(".");
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", CONFIG_FILE);
    }

    let config = Config::default();
    config.save(dir)?;

    println!("Wrote default configuration to {}", CONFIG_FILE);
    println!();
    println!("Sections:");
    println!("  [data]          - workbook path and sheet name");
    println!("  [[credentials]] - username/password pairs the login form accepts");
    println!("  [grid]          - cloud-grid account and browser matrix");
    println!();
    println!(
        "Next: run {} to generate {}",
        style("ddt prepare").cyan(),
        style(config.data.file.display()).cyan()
    );

    Ok(())
}
