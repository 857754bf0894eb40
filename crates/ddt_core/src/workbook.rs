//! Workbook-backed scenario data provider.
//!
//! Reads scenario rows keyed by the header row, and writes result columns
//! back into the same file. Spreadsheet format internals are delegated to
//! `umya-spreadsheet`; this module only knows about cells, headers, and
//! fills.

use crate::error::{DdtError, Result};
use crate::types::{CaseResult, Scenario};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use umya_spreadsheet::{reader, writer, Spreadsheet, Worksheet};

/// Input column headers the engine understands.
pub const COL_TEST_CASE_ID: &str = "TestCaseID";
pub const COL_SCENARIO_DESCRIPTION: &str = "ScenarioDescription";
pub const COL_INPUT_USERNAME: &str = "InputUsername";
pub const COL_INPUT_PASSWORD: &str = "InputPassword";
pub const COL_EXPECTED_OUTCOME: &str = "ExpectedOutcome";
pub const COL_EXPECTED_MESSAGE: &str = "ExpectedMessage";
pub const COL_TEST_CATEGORY: &str = "TestCategory";

/// Result columns appended by the engine, in order.
pub const RESULT_COLUMNS: [&str; 4] = [
    "ActualOutcome",
    "ActualMessage",
    "TestResult",
    "ExecutionTime",
];

pub(crate) const HEADER_FILL: &str = "FF366092";
pub(crate) const FILL_PASSED: &str = "FFC6EFCE";
pub(crate) const FILL_FAILED: &str = "FFFFC7CE";

/// Scenario data provider over one sheet of an xlsx workbook.
///
/// The workbook is loaded once on open; reads work against the in-memory
/// copy and `write_results` persists the mutated workbook back to the same
/// path. Single-threaded, sequential read then write.
pub struct WorkbookProvider {
    path: PathBuf,
    sheet: String,
    book: Spreadsheet,
}

impl WorkbookProvider {
    /// Opens a workbook and selects a sheet.
    ///
    /// Fails before any scenario executes when the file is missing or the
    /// sheet name is wrong.
    pub fn open(path: impl AsRef<Path>, sheet: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(DdtError::DataFileMissing(path));
        }
        let book =
            reader::xlsx::read(&path).map_err(|e| DdtError::Workbook(format!("{e:?}")))?;
        if book.get_sheet_by_name(sheet).is_none() {
            return Err(DdtError::SheetNotFound {
                name: sheet.to_string(),
                path,
            });
        }
        info!(path = %path.display(), sheet, "opened scenario workbook");
        Ok(Self {
            path,
            sheet: sheet.to_string(),
            book,
        })
    }

    /// Path of the backing workbook.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the selected sheet.
    pub fn sheet_name(&self) -> &str {
        &self.sheet
    }

    fn sheet(&self) -> Result<&Worksheet> {
        self.book
            .get_sheet_by_name(&self.sheet)
            .ok_or_else(|| DdtError::SheetNotFound {
                name: self.sheet.clone(),
                path: self.path.clone(),
            })
    }

    fn headers(sheet: &Worksheet) -> Vec<String> {
        let max_col = sheet.get_highest_column();
        (1..=max_col).map(|col| sheet.get_value((col, 1))).collect()
    }

    /// 1-based column position of a header, if present.
    pub fn header_position(&self, name: &str) -> Result<Option<u32>> {
        let sheet = self.sheet()?;
        Ok(Self::headers(sheet)
            .iter()
            .position(|h| h == name)
            .map(|idx| idx as u32 + 1))
    }

    /// Raw value of one cell (1-based column and row); empty cells read "".
    pub fn cell_value(&self, col: u32, row: u32) -> Result<String> {
        Ok(self.sheet()?.get_value((col, row)))
    }

    /// Number of data rows below the header row.
    pub fn row_count(&self) -> Result<u32> {
        let max_row = self.sheet()?.get_highest_row();
        Ok(max_row.saturating_sub(1))
    }

    /// Extracts all scenarios from the sheet.
    ///
    /// The header row supplies the column names; every following row
    /// becomes one [`Scenario`]. Missing cells default to the empty
    /// string, blank ids fall back to `TC{row:03}`.
    pub fn scenarios(&self) -> Result<Vec<Scenario>> {
        let sheet = self.sheet()?;
        let headers = Self::headers(sheet);
        let max_row = sheet.get_highest_row();

        let mut scenarios = Vec::new();
        for row in 2..=max_row {
            let mut record: HashMap<&str, String> = HashMap::new();
            for (idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                record.insert(header.as_str(), sheet.get_value((idx as u32 + 1, row)));
            }
            scenarios.push(build_scenario(row, &record));
        }

        debug!(count = scenarios.len(), "extracted scenarios");
        Ok(scenarios)
    }

    /// Writes results back into the workbook and saves it in place.
    ///
    /// Appends the four result columns when absent (styled like the input
    /// headers), matches rows to results by `TestCaseID`, colors the
    /// `TestResult` cell by verdict, and persists to the original path.
    /// Re-running against an annotated workbook reuses the existing
    /// columns.
    pub fn write_results(&mut self, results: &[CaseResult]) -> Result<()> {
        let sheet_name = self.sheet.clone();
        let sheet = self
            .book
            .get_sheet_by_name_mut(&sheet_name)
            .ok_or_else(|| DdtError::SheetNotFound {
                name: sheet_name.clone(),
                path: self.path.clone(),
            })?;

        let headers = Self::headers(sheet);
        let base_col = match headers.iter().position(|h| h == RESULT_COLUMNS[0]) {
            Some(idx) => idx as u32 + 1,
            None => {
                let next = headers.len() as u32 + 1;
                for (offset, name) in RESULT_COLUMNS.iter().enumerate() {
                    let col = next + offset as u32;
                    sheet.get_cell_mut((col, 1)).set_value(*name);
                    style_header_cell(sheet, col, 1);
                }
                next
            }
        };

        let max_row = sheet.get_highest_row();
        for row in 2..=max_row {
            let id = sheet.get_value((1, row));
            let Some(result) = results.iter().find(|r| r.scenario_id == id) else {
                continue;
            };

            sheet
                .get_cell_mut((base_col, row))
                .set_value(result.actual_status.as_str());
            sheet
                .get_cell_mut((base_col + 1, row))
                .set_value(result.actual_message.as_str());
            sheet
                .get_cell_mut((base_col + 2, row))
                .set_value(result.verdict.as_str());
            let fill = if result.verdict.is_passed() {
                FILL_PASSED
            } else {
                FILL_FAILED
            };
            sheet
                .get_style_mut((base_col + 2, row))
                .set_background_color(fill);
            sheet
                .get_cell_mut((base_col + 3, row))
                .set_value(result.executed_at.as_str());
        }

        writer::xlsx::write(&self.book, &self.path)
            .map_err(|e| DdtError::Workbook(format!("{e:?}")))?;
        info!(path = %self.path.display(), results = results.len(), "wrote results back to workbook");
        Ok(())
    }
}

/// Applies the shared header styling: solid fill, bold white font.
pub(crate) fn style_header_cell(sheet: &mut Worksheet, col: u32, row: u32) {
    let style = sheet.get_style_mut((col, row));
    style.set_background_color(HEADER_FILL);
    let font = style.get_font_mut();
    font.set_bold(true);
    font.get_color_mut().set_argb("FFFFFFFF");
}

fn build_scenario(row: u32, record: &HashMap<&str, String>) -> Scenario {
    let field = |name: &str| record.get(name).cloned().unwrap_or_default();

    let mut id = field(COL_TEST_CASE_ID);
    if id.is_empty() {
        id = format!("TC{:03}", row - 1);
    }
    let mut description = field(COL_SCENARIO_DESCRIPTION);
    if description.is_empty() {
        description = "N/A".to_string();
    }
    let mut category = field(COL_TEST_CATEGORY);
    if category.is_empty() {
        category = "General".to_string();
    }

    Scenario {
        id,
        description,
        username: field(COL_INPUT_USERNAME),
        password: field(COL_INPUT_PASSWORD),
        expected_outcome: field(COL_EXPECTED_OUTCOME),
        expected_message: field(COL_EXPECTED_MESSAGE),
        category,
    }
}
