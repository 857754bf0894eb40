//! Generate the scenario workbook.

use anyhow::Result;
use console::style;
use ddt_core::{dataset, Config};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Build the scenario workbook from the canonical dataset.
pub fn run(data: Option<PathBuf>, sheet: Option<String>, force: bool) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let path = data.unwrap_or(config.data.file);
    let sheet = sheet.unwrap_or(config.data.sheet);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let cases = dataset::default_dataset();
    dataset::write_dataset(&path, &sheet, &cases)?;

    println!(
        "{} Wrote {} scenarios to {}",
        style("✓").green(),
        cases.len(),
        style(path.display()).cyan()
    );
    println!("  Sheet: {}", sheet);

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for case in &cases {
        *by_category.entry(case.category.as_str()).or_default() += 1;
    }
    println!();
    println!("{}", style("Categories:").bold());
    for (category, count) in by_category {
        println!("  {:<10} {}", category, style(count).cyan());
    }

    Ok(())
}
