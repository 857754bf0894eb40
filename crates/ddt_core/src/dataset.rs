//! Canonical scenario dataset and workbook generation.
//!
//! Mirrors the login suite the harness ships with: positive, negative,
//! security, and boundary cases against the practice credential pair.

use crate::error::{DdtError, Result};
use crate::types::Scenario;
use crate::workbook::{
    style_header_cell, FILL_FAILED, FILL_PASSED, COL_EXPECTED_MESSAGE, COL_EXPECTED_OUTCOME,
    COL_INPUT_PASSWORD, COL_INPUT_USERNAME, COL_SCENARIO_DESCRIPTION, COL_TEST_CASE_ID,
    COL_TEST_CATEGORY,
};
use std::path::Path;
use tracing::info;
use umya_spreadsheet::writer;

/// Input headers in sheet order.
pub const INPUT_COLUMNS: [&str; 7] = [
    COL_TEST_CASE_ID,
    COL_SCENARIO_DESCRIPTION,
    COL_INPUT_USERNAME,
    COL_INPUT_PASSWORD,
    COL_EXPECTED_OUTCOME,
    COL_EXPECTED_MESSAGE,
    COL_TEST_CATEGORY,
];

/// The canonical fifteen login scenarios (TC001–TC015).
pub fn default_dataset() -> Vec<Scenario> {
    let rows: Vec<[String; 7]> = vec![
        row(
            "TC001",
            "Valid student credentials",
            "student",
            "Password123",
            "SUCCESS",
            "Logged In Successfully",
            "Positive",
        ),
        row(
            "TC002",
            "Valid credentials with different case password",
            "student",
            "password123",
            "FAILURE",
            "Your password is invalid",
            "Negative",
        ),
        row(
            "TC003",
            "Valid username with trailing space",
            "student ",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Negative",
        ),
        row(
            "TC004",
            "Invalid username with valid password",
            "invaliduser",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Negative",
        ),
        row(
            "TC005",
            "Valid username with wrong password",
            "student",
            "wrongpassword",
            "FAILURE",
            "Your password is invalid",
            "Negative",
        ),
        row(
            "TC006",
            "Empty username field",
            "",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Negative",
        ),
        row(
            "TC007",
            "Empty password field",
            "student",
            "",
            "FAILURE",
            "Your password is invalid",
            "Negative",
        ),
        row(
            "TC008",
            "Both fields empty",
            "",
            "",
            "FAILURE",
            "Your username is invalid",
            "Negative",
        ),
        row(
            "TC009",
            "SQL injection in username",
            "student' OR '1'='1",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Security",
        ),
        row(
            "TC010",
            "XSS attempt in username",
            "<script>alert('xss')</script>",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Security",
        ),
        row(
            "TC011",
            "SQL injection in password",
            "student",
            "' OR '1'='1",
            "FAILURE",
            "Your password is invalid",
            "Security",
        ),
        row(
            "TC012",
            "Very long username",
            &"a".repeat(300),
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Boundary",
        ),
        row(
            "TC013",
            "Very long password",
            "student",
            &"b".repeat(300),
            "FAILURE",
            "Your password is invalid",
            "Boundary",
        ),
        row(
            "TC014",
            "Case sensitive username",
            "Student",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Boundary",
        ),
        row(
            "TC015",
            "Case sensitive username uppercase",
            "STUDENT",
            "Password123",
            "FAILURE",
            "Your username is invalid",
            "Boundary",
        ),
    ];

    rows.into_iter()
        .map(
            |[id, description, username, password, expected_outcome, expected_message, category]| {
                Scenario {
                    id,
                    description,
                    username,
                    password,
                    expected_outcome,
                    expected_message,
                    category,
                }
            },
        )
        .collect()
}

fn row(
    id: &str,
    description: &str,
    username: &str,
    password: &str,
    expected_outcome: &str,
    expected_message: &str,
    category: &str,
) -> [String; 7] {
    [
        id.to_string(),
        description.to_string(),
        username.to_string(),
        password.to_string(),
        expected_outcome.to_string(),
        expected_message.to_string(),
        category.to_string(),
    ]
}

/// Builds a scenario workbook at `path` with the given cases.
///
/// The header row gets the shared header styling; each expected-outcome
/// cell is colored by SUCCESS/FAILURE so the sheet reads at a glance.
pub fn write_dataset(path: impl AsRef<Path>, sheet: &str, cases: &[Scenario]) -> Result<()> {
    let path = path.as_ref();
    let mut book = umya_spreadsheet::new_file();
    let ws = book
        .get_sheet_by_name_mut("Sheet1")
        .ok_or_else(|| DdtError::Workbook("fresh workbook has no default sheet".to_string()))?;
    ws.set_name(sheet);

    for (idx, header) in INPUT_COLUMNS.iter().enumerate() {
        let col = idx as u32 + 1;
        ws.get_cell_mut((col, 1)).set_value(*header);
        style_header_cell(ws, col, 1);
    }

    for (idx, case) in cases.iter().enumerate() {
        let row = idx as u32 + 2;
        ws.get_cell_mut((1, row)).set_value(case.id.as_str());
        ws.get_cell_mut((2, row)).set_value(case.description.as_str());
        ws.get_cell_mut((3, row)).set_value(case.username.as_str());
        ws.get_cell_mut((4, row)).set_value(case.password.as_str());
        ws.get_cell_mut((5, row))
            .set_value(case.expected_outcome.as_str());
        ws.get_cell_mut((6, row))
            .set_value(case.expected_message.as_str());
        ws.get_cell_mut((7, row)).set_value(case.category.as_str());

        let fill = if case.expected_outcome == "SUCCESS" {
            FILL_PASSED
        } else {
            FILL_FAILED
        };
        ws.get_style_mut((5, row)).set_background_color(fill);
    }

    writer::xlsx::write(&book, path).map_err(|e| DdtError::Workbook(format!("{e:?}")))?;
    info!(path = %path.display(), cases = cases.len(), sheet, "wrote scenario workbook");
    Ok(())
}
