use ddt_core::Verdict;

/// Declarative assertions on the workbook and the last suite report
#[derive(Debug)]
pub enum Assertion {
    // Workbook shape
    RowCount(u32),
    HeaderCount(usize),
    ResultColumnsPresent,
    NoResultColumns,

    // Per-row results
    RowVerdict {
        id: String,
        verdict: Verdict,
    },
    RowActual {
        id: String,
        status: String,
        message_contains: String,
    },
    ExecutionStamp {
        id: String,
        stamp: String,
    },

    // Report
    ReportTotals {
        passed: u32,
        failed: u32,
    },
    ReportEmpty,
    ReportDurationSecs(i64),
    SummaryContains(String),
}
