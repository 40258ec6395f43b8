// Fixture loading
//
// Test data lives in test-data/*.json, keyed by test-case ID. Payload shapes
// differ per case (a rejection flow carries more fields than a happy path), so
// cases are deserialized individually into the type the test asks for.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use orangehrm_pom::pages::{TimesheetStatus, Weekday};

/// The fixture files shipped with the suite.
#[derive(Debug, Clone, Copy)]
pub enum FixtureFile {
    Customers,
    Projects,
    Timesheets,
}

impl FixtureFile {
    fn file_name(self) -> &'static str {
        match self {
            FixtureFile::Customers => "customers_data.json",
            FixtureFile::Projects => "projects_data.json",
            FixtureFile::Timesheets => "timesheet_data.json",
        }
    }

    fn path(self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test-data")
            .join(self.file_name())
    }
}

/// One test case entry from a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase<T> {
    pub test_name: String,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    pub test_data: T,
    #[serde(default)]
    pub expected_error: Option<String>,
    #[serde(default)]
    pub expected_result: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
}

/// Loads one case by ID from a fixture file.
pub fn load_case<T: DeserializeOwned>(file: FixtureFile, case_id: &str) -> Result<TestCase<T>> {
    let path = file.path();
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading fixture file {}", path.display()))?;
    let mut document: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    let case = document
        .get_mut("test_cases")
        .and_then(|cases| cases.get_mut(case_id))
        .with_context(|| format!("fixture case '{case_id}' missing from {}", path.display()))?
        .take();

    serde_json::from_value(case).with_context(|| format!("deserializing fixture case '{case_id}'"))
}

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerData {
    pub customer_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub project_admin: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityData {
    #[serde(default)]
    pub activity_name: String,
}

/// One project/activity row with its hour entries.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetRowData {
    pub project: String,
    pub activity: String,
    pub hours: BTreeMap<Weekday, String>,
}

/// Happy path: fill, submit, approve.
#[derive(Debug, Clone, Deserialize)]
pub struct HappyPathData {
    pub project: String,
    pub activity: String,
    pub hours: BTreeMap<Weekday, String>,
    pub expected_status_after_submit: TimesheetStatus,
    pub expected_status_after_approve: TimesheetStatus,
}

/// Rejection flow: submit, reject, correct, resubmit, approve.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectionFlowData {
    pub project: String,
    pub activity: String,
    pub initial_hours: BTreeMap<Weekday, String>,
    pub corrected_hours: BTreeMap<Weekday, String>,
    pub rejection_comment: String,
    pub expected_status_after_submit: TimesheetStatus,
    pub expected_status_after_reject: TimesheetStatus,
    pub expected_status_after_resubmit: TimesheetStatus,
    pub expected_final_status: TimesheetStatus,
}

/// Several rows in one week.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiRowData {
    pub rows: Vec<TimesheetRowData>,
    pub expected_grand_total: String,
    pub expected_status_after_submit: TimesheetStatus,
    pub expected_status_after_approve: TimesheetStatus,
}

/// Row with project/activity but no hours (save must be blocked).
#[derive(Debug, Clone, Deserialize)]
pub struct RowWithoutHoursData {
    pub project: String,
    pub activity: String,
}

/// Invalid hour values plus one valid decimal row for the totals check.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursValidationData {
    pub project: String,
    pub activity: String,
    pub invalid_values: Vec<String>,
    pub valid_hours: BTreeMap<Weekday, String>,
    pub expected_row_total: String,
}
