// Timesheet page (Time module)
//
// Covers both sides of the workflow: the employee's My Timesheet screen
// (create, fill, save, submit) and the supervisor's Employee Timesheet screen
// (search, view, approve, reject).

use std::fmt;

use serde::{Deserialize, Serialize};
use thirtyfour::Key;

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const MY_TIMESHEET_URL: &str = "time/viewMyTimesheet";
const EMPLOYEE_TIMESHEET_URL: &str = "time/viewEmployeeTimesheet";

const CREATE_TIMESHEET_BUTTON: Selector =
    Selector::xpath("//button[normalize-space()='Create Timesheet']");
const EDIT_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Edit']");
const SAVE_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Save']");
const SUBMIT_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Submit']");
const APPROVE_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Approve']");
const REJECT_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Reject']");

const ADD_ROW_BUTTON: Selector = Selector::xpath(
    "//button[contains(@class, 'oxd-icon-button') and .//i[contains(@class, 'oxd-icon bi-plus')]]",
);
const PROJECT_INPUTS: Selector =
    Selector::xpath("//label[text()='Project']/parent::div/following-sibling::div//input");
const ACTIVITY_DROPDOWNS: Selector =
    Selector::xpath("//div[contains(@class, 'oxd-select-text oxd-select-text--active')]");
const DURATION_INPUTS: Selector =
    Selector::xpath("//td[contains(@class, '--duration-input')]//input");

const GRAND_TOTAL: Selector =
    Selector::xpath("//div[contains(@class, 'timesheet-grand-total')]");

fn row_total_cell(row_index: usize) -> Selector {
    Selector::xpath_owned(format!(
        "(//tr[contains(@class, 'orangehrm-timesheet-table-body-row')]//td[last()])[{}]",
        row_index + 1
    ))
}

const STATUS_NOT_SUBMITTED: Selector =
    Selector::xpath("//p[contains(normalize-space(), 'Status: Not Submitted')]");
const STATUS_SUBMITTED: Selector =
    Selector::xpath("//p[contains(normalize-space(), 'Status: Submitted')]");
const STATUS_APPROVED: Selector =
    Selector::xpath("//p[contains(normalize-space(), 'Status: Approved')]");
const STATUS_REJECTED: Selector =
    Selector::xpath("//p[contains(normalize-space(), 'Status: Rejected')]");

const COMMENT_TEXTAREA: Selector = Selector::xpath("//textarea[contains(@class, 'oxd-textarea')]");
const CONFIRM_REJECT_BUTTON: Selector =
    Selector::xpath("//button[contains(@class, 'oxd-button--label-danger')]");

const ERROR_MESSAGE_HOURS: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and contains(normalize-space(), 'Should Be Less Than 24')]",
);

const SUCCESS_MESSAGE: Selector = Selector::css(".oxd-toast-content--success");

const NEXT_WEEK_BUTTON: Selector = Selector::xpath(
    "//button[@class='oxd-icon-button orangehrm-timeperiod-icon --next']",
);

const EMPLOYEE_NAME_TEXT: Selector =
    Selector::xpath("//p[contains(@class, 'oxd-userdropdown-name')]");
const EMPLOYEE_SEARCH_INPUT: Selector =
    Selector::xpath("//input[@placeholder='Type for hints...']");
const VIEW_BUTTON: Selector = Selector::xpath(
    "//button[contains(@class, 'oxd-button oxd-button--medium oxd-button--secondary orangehrm-left-space')]",
);

fn listbox_option(text: &str) -> Selector {
    Selector::xpath_owned(format!(
        "//div[@role='listbox']//span[contains(text(), '{text}')]"
    ))
}

/// Status of a weekly timesheet as displayed in the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimesheetStatus {
    #[serde(rename = "Not Submitted")]
    NotSubmitted,
    Submitted,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    /// Whether the employee may still edit rows in this state.
    pub fn is_editable(self) -> bool {
        matches!(self, TimesheetStatus::NotSubmitted)
    }

    /// Whether any further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, TimesheetStatus::Approved)
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TimesheetStatus::NotSubmitted => "Not Submitted",
            TimesheetStatus::Submitted => "Submitted",
            TimesheetStatus::Approved => "Approved",
            TimesheetStatus::Rejected => "Rejected",
        };
        f.write_str(text)
    }
}

/// Day columns of the timesheet grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Zero-based grid column of the day (Mon=0 .. Sun=6).
    pub fn column(self) -> usize {
        self as usize
    }
}

/// Page object for the timesheet screens.
pub struct TimesheetPage {
    base: BasePage,
}

impl TimesheetPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Opens My Timesheet (employee view).
    pub async fn open_my_timesheet(&self) -> Result<()> {
        tracing::info!("Navigating to My Timesheet page");
        self.base.goto_path(MY_TIMESHEET_URL).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Opens Employee Timesheets (supervisor view).
    pub async fn open_employee_timesheet(&self) -> Result<()> {
        tracing::info!("Navigating to Employee Timesheet page");
        self.base.goto_path(EMPLOYEE_TIMESHEET_URL).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Whether this week still offers the Create Timesheet button.
    pub async fn is_create_timesheet_button_visible(&self) -> bool {
        self.base.is_visible(&CREATE_TIMESHEET_BUTTON).await
    }

    /// Whether the Create Timesheet button is disabled (future weeks).
    pub async fn is_create_timesheet_button_disabled(&self) -> Result<bool> {
        let disabled = self.base.attr_of(&CREATE_TIMESHEET_BUTTON, "disabled").await?;
        Ok(disabled.is_some())
    }

    pub async fn click_create_timesheet(&self) -> Result<()> {
        tracing::info!("Clicking Create Timesheet button");
        self.base.click(&CREATE_TIMESHEET_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    pub async fn is_edit_button_visible(&self) -> bool {
        self.base.is_visible(&EDIT_BUTTON).await
    }

    pub async fn click_edit(&self) -> Result<()> {
        tracing::info!("Clicking Edit button");
        self.base.click(&EDIT_BUTTON).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Adds a fresh entry row to the grid.
    pub async fn click_add_row(&self) -> Result<()> {
        tracing::info!("Clicking Add Row button");
        self.base.click(&ADD_ROW_BUTTON).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Selects a project in the given row via autocomplete: type the name,
    /// then take the first suggestion with the keyboard.
    pub async fn select_project(&self, project_name: &str, row_index: usize) -> Result<()> {
        tracing::info!("Selecting project '{project_name}' at row {row_index}");
        let inputs = self.base.find_all(&PROJECT_INPUTS).await?;
        let Some(input) = inputs.get(row_index) else {
            tracing::warn!(
                "Row index {row_index} out of range, {} project inputs present",
                inputs.len()
            );
            return Ok(());
        };

        input.clear().await?;
        input.send_keys(project_name).await?;
        self.base.pause(1500).await;

        self.base.press(input, Key::Down).await?;
        self.base.pause(300).await;
        self.base.press(input, Key::Enter).await?;
        self.base.pause(500).await;
        Ok(())
    }

    /// Selects an activity in the given row from its dropdown listbox.
    pub async fn select_activity(&self, activity_name: &str, row_index: usize) -> Result<()> {
        tracing::info!("Selecting activity '{activity_name}' at row {row_index}");
        let dropdowns = self.base.find_all(&ACTIVITY_DROPDOWNS).await?;
        tracing::debug!("Found {} activity dropdowns", dropdowns.len());

        let Some(dropdown) = dropdowns.get(row_index) else {
            tracing::warn!(
                "Row index {row_index} out of range, {} activity dropdowns present",
                dropdowns.len()
            );
            return Ok(());
        };

        dropdown.click().await?;
        self.base.pause(500).await;

        let option = listbox_option(activity_name);
        if self.base.is_visible(&option).await {
            self.base.click(&option).await?;
            self.base.pause(500).await;
        } else {
            tracing::warn!("Activity option '{activity_name}' not found in dropdown");
        }
        Ok(())
    }

    /// Fills an hour cell, addressed by row and day column. Tab commits the
    /// cell so the grid recalculates totals.
    pub async fn fill_hours(&self, day: Weekday, hours: &str, row_index: usize) -> Result<()> {
        tracing::info!("Filling {hours} hours for {day:?} at row {row_index}");
        let cells = self.base.find_all(&DURATION_INPUTS).await?;
        let cell_index = row_index * 7 + day.column();

        let Some(cell) = cells.get(cell_index) else {
            tracing::warn!(
                "Cell index {cell_index} out of range, {} duration inputs present",
                cells.len()
            );
            return Ok(());
        };

        cell.clear().await?;
        cell.send_keys(hours).await?;
        self.base.press(cell, Key::Tab).await?;
        Ok(())
    }

    pub async fn save_timesheet(&self) -> Result<()> {
        tracing::info!("Clicking Save button");
        self.base.click(&SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    pub async fn is_save_successful(&self) -> bool {
        self.base.is_visible(&SUCCESS_MESSAGE).await
    }

    pub async fn click_submit(&self) -> Result<()> {
        tracing::info!("Clicking Submit button");
        self.base.click(&SUBMIT_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Approves the currently viewed timesheet (supervisor action).
    pub async fn click_approve(&self) -> Result<()> {
        tracing::info!("Clicking Approve button");
        self.base.click(&APPROVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Rejects the currently viewed timesheet with a comment (supervisor
    /// action), confirming the dialog when it appears.
    pub async fn click_reject(&self, comment: &str) -> Result<()> {
        tracing::info!("Clicking Reject button with comment: {comment}");
        self.base.click(&REJECT_BUTTON).await?;
        self.base.pause(1000).await;

        if !comment.is_empty() && self.base.is_visible(&COMMENT_TEXTAREA).await {
            self.base.type_into(&COMMENT_TEXTAREA, comment).await?;
        }
        if self.base.is_visible(&CONFIRM_REJECT_BUTTON).await {
            self.base.click(&CONFIRM_REJECT_BUTTON).await?;
            self.base.pause(2000).await;
        }
        Ok(())
    }

    /// Reads the status banner. `None` when no timesheet is on screen.
    pub async fn status(&self) -> Option<TimesheetStatus> {
        if self.base.is_visible(&STATUS_NOT_SUBMITTED).await {
            Some(TimesheetStatus::NotSubmitted)
        } else if self.base.is_visible(&STATUS_SUBMITTED).await {
            Some(TimesheetStatus::Submitted)
        } else if self.base.is_visible(&STATUS_APPROVED).await {
            Some(TimesheetStatus::Approved)
        } else if self.base.is_visible(&STATUS_REJECTED).await {
            Some(TimesheetStatus::Rejected)
        } else {
            None
        }
    }

    /// Waits until a row's total cell shows the expected value. The grid
    /// recalculates asynchronously after each committed cell, so this retries
    /// rather than reading once.
    pub async fn expect_row_total(&self, row_index: usize, expected: &str) -> Result<()> {
        self.base.expect(&row_total_cell(row_index)).to_have_text(expected).await
    }

    /// Waits until the week's grand-total cell shows the expected value.
    pub async fn expect_grand_total(&self, expected: &str) -> Result<()> {
        self.base.expect(&GRAND_TOTAL).to_have_text(expected).await
    }

    /// Whether the hour-format inline error is showing.
    pub async fn is_hours_error_visible(&self) -> bool {
        self.base.is_visible(&ERROR_MESSAGE_HOURS).await
    }

    /// Whether a reviewer comment is rendered anywhere on the sheet (the
    /// employee-facing view of a rejection comment).
    pub async fn is_comment_visible(&self, comment: &str) -> bool {
        self.base
            .expect(&Selector::css("body"))
            .to_contain_text(comment)
            .await
            .is_ok()
    }

    /// Display name shown in the top bar, used to find the employee again
    /// from the supervisor's search screen.
    pub async fn employee_display_name(&self) -> Result<String> {
        Ok(self.base.text_of(&EMPLOYEE_NAME_TEXT).await?.trim().to_string())
    }

    /// Fills the employee search on the supervisor screen, taking the first
    /// autocomplete suggestion.
    pub async fn search_employee_timesheet(&self, employee_name: &str) -> Result<()> {
        tracing::info!("Searching timesheet for employee: {employee_name}");
        let input = self.base.find(&EMPLOYEE_SEARCH_INPUT).await?;
        input.clear().await?;
        input.send_keys(employee_name).await?;
        self.base.pause(1500).await;

        self.base.press(&input, Key::Down).await?;
        self.base.pause(300).await;
        self.base.press(&input, Key::Enter).await?;
        self.base.pause(500).await;
        Ok(())
    }

    /// Opens the searched employee's timesheet.
    pub async fn view_employee_timesheet(&self) -> Result<()> {
        tracing::info!("Viewing employee timesheet");
        self.base.click(&VIEW_BUTTON).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Moves the period selector one week forward.
    pub async fn go_to_next_week(&self) -> Result<()> {
        tracing::info!("Navigating to next week");
        self.base.click(&NEXT_WEEK_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }
}
