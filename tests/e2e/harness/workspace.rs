use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated on-disk environment for one scenario run.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn empty() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self { dir })
    }

    /// Get workspace path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path the scenario workbook lives at
    pub fn workbook_path(&self) -> PathBuf {
        self.path().join("test_data.xlsx")
    }

    /// Check if the workbook exists
    pub fn workbook_exists(&self) -> bool {
        self.workbook_path().exists()
    }

    /// Delete the workbook if present
    pub fn remove_workbook(&self) -> Result<()> {
        let path = self.workbook_path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove workbook: {}", path.display()))?;
        }
        Ok(())
    }

    /// Write a raw sheet (header row first) to the workbook path.
    ///
    /// Bypasses the dataset writer so scenarios can shape arbitrary
    /// headers, blank cells, and sheet names.
    pub fn write_raw_sheet(&self, sheet_name: &str, rows: &[Vec<String>]) -> Result<()> {
        let mut book = umya_spreadsheet::new_file();
        let ws = book
            .get_sheet_by_name_mut("Sheet1")
            .context("fresh workbook has no default sheet")?;
        ws.set_name(sheet_name);
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    ws.get_cell_mut((c as u32 + 1, r as u32 + 1))
                        .set_value(value.as_str());
                }
            }
        }
        umya_spreadsheet::writer::xlsx::write(&book, self.workbook_path())
            .map_err(|e| anyhow::anyhow!("Failed to write raw sheet: {e:?}"))?;
        Ok(())
    }
}
