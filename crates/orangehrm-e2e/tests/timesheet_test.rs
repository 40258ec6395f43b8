// Multi-actor timesheet workflow
//
// Employee and supervisor alternate through serial login/logout swaps in one
// browser session; the expected status after every step comes from the
// workflow model, cross-checked against the fixture data.

use std::collections::BTreeMap;

use anyhow::ensure;

use orangehrm_e2e::fixtures::{
    load_case, FixtureFile, HappyPathData, HoursValidationData, MultiRowData, RejectionFlowData,
    RowWithoutHoursData,
};
use orangehrm_e2e::harness::{
    login_and_open_timesheet, logout, mint_employee, with_session, MintedEmployee,
};
use orangehrm_e2e::workflow::{apply, Actor, TimesheetAction};
use orangehrm_pom::pages::{TimesheetPage, TimesheetStatus, Weekday};
use orangehrm_pom::Session;

/// Mints a fresh employee and lands on their (empty) My Timesheet screen.
async fn start_as_new_employee(
    session: &Session,
) -> anyhow::Result<(TimesheetPage, MintedEmployee)> {
    let employee = mint_employee(session).await?;
    let timesheet =
        login_and_open_timesheet(session, &employee.credentials, Actor::Employee).await?;
    Ok((timesheet, employee))
}

/// Creates this week's timesheet, or opens it for edit when it exists.
async fn create_or_edit(timesheet: &TimesheetPage) -> anyhow::Result<()> {
    if timesheet.is_create_timesheet_button_visible().await {
        timesheet.click_create_timesheet().await?;
    } else if timesheet.is_edit_button_visible().await {
        timesheet.click_edit().await?;
    }
    Ok(())
}

/// Fills project and activity for a row.
async fn prepare_row(
    timesheet: &TimesheetPage,
    project: &str,
    activity: &str,
    row_index: usize,
) -> anyhow::Result<()> {
    timesheet.select_project(project, row_index).await?;
    timesheet.select_activity(activity, row_index).await?;
    Ok(())
}

/// Enters every non-empty hour value of a row.
async fn fill_hours(
    timesheet: &TimesheetPage,
    hours: &BTreeMap<Weekday, String>,
    row_index: usize,
) -> anyhow::Result<()> {
    for (day, value) in hours {
        if !value.is_empty() {
            timesheet.fill_hours(*day, value, row_index).await?;
        }
    }
    Ok(())
}

/// Saves and submits, verifying both steps took effect.
async fn save_and_submit(
    timesheet: &TimesheetPage,
    expected_status: TimesheetStatus,
) -> anyhow::Result<()> {
    timesheet.save_timesheet().await?;
    ensure!(
        timesheet.is_save_successful().await,
        "timesheet save did not produce a success toast"
    );

    timesheet.click_submit().await?;
    let status = timesheet.status().await;
    ensure!(
        status == Some(expected_status),
        "status should be '{expected_status}' after submit, got {status:?}"
    );
    Ok(())
}

/// Switches to the supervisor, opens the employee's sheet, and reviews it.
async fn review_as_supervisor(
    session: &Session,
    employee_name: &str,
    decision: TimesheetAction,
    comment: &str,
) -> anyhow::Result<()> {
    logout(session).await?;
    let admin = session.config().admin.clone();
    let timesheet = login_and_open_timesheet(session, &admin, Actor::Supervisor).await?;

    timesheet.search_employee_timesheet(employee_name).await?;
    timesheet.view_employee_timesheet().await?;

    match decision {
        TimesheetAction::Approve => timesheet.click_approve().await?,
        TimesheetAction::Reject => timesheet.click_reject(comment).await?,
        other => anyhow::bail!("{other:?} is not a supervisor review decision"),
    }
    Ok(())
}

/// Switches back to the employee and reads their timesheet status.
async fn reread_status_as_employee(
    session: &Session,
    employee: &MintedEmployee,
) -> anyhow::Result<Option<TimesheetStatus>> {
    logout(session).await?;
    let timesheet =
        login_and_open_timesheet(session, &employee.credentials, Actor::Employee).await?;
    Ok(timesheet.status().await)
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn happy_path_employee_submits_supervisor_approves() -> anyhow::Result<()> {
    with_session(
        "happy_path_employee_submits_supervisor_approves",
        |session| async move {
            let case = load_case::<HappyPathData>(FixtureFile::Timesheets, "TIMESHEETS_01")?;
            let data = &case.test_data;

            // The fixture expectations must agree with the workflow model.
            let after_submit = apply(
                Some(TimesheetStatus::NotSubmitted),
                TimesheetAction::Submit,
                Actor::Employee,
            );
            ensure!(
                after_submit == Some(data.expected_status_after_submit),
                "fixture submit expectation disagrees with the workflow model"
            );
            let after_approve = apply(after_submit, TimesheetAction::Approve, Actor::Supervisor);
            ensure!(
                after_approve == Some(data.expected_status_after_approve),
                "fixture approve expectation disagrees with the workflow model"
            );

            let (timesheet, employee) = start_as_new_employee(&session).await?;
            let employee_name = timesheet.employee_display_name().await?;

            create_or_edit(&timesheet).await?;
            prepare_row(&timesheet, &data.project, &data.activity, 0).await?;
            fill_hours(&timesheet, &data.hours, 0).await?;
            save_and_submit(&timesheet, data.expected_status_after_submit).await?;

            review_as_supervisor(&session, &employee_name, TimesheetAction::Approve, "").await?;

            let final_status = reread_status_as_employee(&session, &employee).await?;
            ensure!(
                final_status == Some(data.expected_status_after_approve),
                "final status should be '{}', got {final_status:?}",
                data.expected_status_after_approve
            );
            ensure!(
                final_status.is_some_and(|s| s.is_terminal()),
                "an approved timesheet should be in a terminal state"
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn rejection_flow_employee_corrects_and_resubmits() -> anyhow::Result<()> {
    with_session(
        "rejection_flow_employee_corrects_and_resubmits",
        |session| async move {
            let case = load_case::<RejectionFlowData>(FixtureFile::Timesheets, "TIMESHEETS_02")?;
            let data = &case.test_data;

            let after_reject = apply(
                Some(TimesheetStatus::Submitted),
                TimesheetAction::Reject,
                Actor::Supervisor,
            );
            ensure!(
                after_reject == Some(data.expected_status_after_reject),
                "fixture reject expectation disagrees with the workflow model"
            );

            // Employee submits the first version.
            let (timesheet, employee) = start_as_new_employee(&session).await?;
            let employee_name = timesheet.employee_display_name().await?;

            create_or_edit(&timesheet).await?;
            prepare_row(&timesheet, &data.project, &data.activity, 0).await?;
            fill_hours(&timesheet, &data.initial_hours, 0).await?;
            save_and_submit(&timesheet, data.expected_status_after_submit).await?;

            // Supervisor rejects with a comment.
            review_as_supervisor(
                &session,
                &employee_name,
                TimesheetAction::Reject,
                &data.rejection_comment,
            )
            .await?;

            // Rejection hands the sheet back to the employee for editing.
            let rejected_status = reread_status_as_employee(&session, &employee).await?;
            ensure!(
                rejected_status == Some(data.expected_status_after_reject),
                "status after rejection should be '{}', got {rejected_status:?}",
                data.expected_status_after_reject
            );
            ensure!(
                rejected_status.is_some_and(|s| s.is_editable()),
                "a rejected timesheet should be editable again"
            );

            // The supervisor's comment must be visible to the employee.
            let timesheet = TimesheetPage::new(session.base());
            ensure!(
                timesheet.is_comment_visible(&data.rejection_comment).await,
                "the rejection comment '{}' should be visible to the employee",
                data.rejection_comment
            );

            // Employee corrects the hours and resubmits.
            create_or_edit(&timesheet).await?;
            fill_hours(&timesheet, &data.corrected_hours, 0).await?;
            save_and_submit(&timesheet, data.expected_status_after_resubmit).await?;

            // Supervisor approves the corrected version.
            review_as_supervisor(&session, &employee_name, TimesheetAction::Approve, "").await?;

            let final_status = reread_status_as_employee(&session, &employee).await?;
            ensure!(
                final_status == Some(data.expected_final_status),
                "final status should be '{}', got {final_status:?}",
                data.expected_final_status
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn timesheet_with_multiple_projects_in_one_week() -> anyhow::Result<()> {
    with_session(
        "timesheet_with_multiple_projects_in_one_week",
        |session| async move {
            let case = load_case::<MultiRowData>(FixtureFile::Timesheets, "TIMESHEETS_04")?;
            let data = &case.test_data;

            let (timesheet, employee) = start_as_new_employee(&session).await?;
            let employee_name = timesheet.employee_display_name().await?;

            create_or_edit(&timesheet).await?;
            for (row_index, row) in data.rows.iter().enumerate() {
                if row_index != 0 {
                    timesheet.click_add_row().await?;
                }
                prepare_row(&timesheet, &row.project, &row.activity, row_index).await?;
                fill_hours(&timesheet, &row.hours, row_index).await?;
            }

            // The grand total is the arithmetic sum across both rows.
            timesheet.expect_grand_total(&data.expected_grand_total).await?;

            save_and_submit(&timesheet, data.expected_status_after_submit).await?;

            review_as_supervisor(&session, &employee_name, TimesheetAction::Approve, "").await?;

            let final_status = reread_status_as_employee(&session, &employee).await?;
            ensure!(
                final_status == Some(data.expected_status_after_approve),
                "final status should be '{}', got {final_status:?}",
                data.expected_status_after_approve
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn submitting_an_empty_timesheet_is_blocked() -> anyhow::Result<()> {
    with_session(
        "submitting_an_empty_timesheet_is_blocked",
        |session| async move {
            let case =
                load_case::<serde_json::Value>(FixtureFile::Timesheets, "TIMESHEETS_03")?;
            let expected = case.expected_result.as_deref().unwrap_or_default();

            let (timesheet, _employee) = start_as_new_employee(&session).await?;
            create_or_edit(&timesheet).await?;

            // A missing Submit button blocks the submission as effectively as
            // an inline error, so a failed click also passes.
            if timesheet.click_submit().await.is_ok() {
                let status = timesheet.status().await;
                ensure!(
                    status != Some(TimesheetStatus::Submitted),
                    "expected '{expected}', but the empty timesheet reached {status:?}"
                );
            }
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn saving_a_row_without_hours_is_blocked() -> anyhow::Result<()> {
    with_session("saving_a_row_without_hours_is_blocked", |session| async move {
        let case = load_case::<RowWithoutHoursData>(FixtureFile::Timesheets, "TIMESHEETS_06")?;
        let data = &case.test_data;

        let (timesheet, _employee) = start_as_new_employee(&session).await?;
        create_or_edit(&timesheet).await?;
        prepare_row(&timesheet, &data.project, &data.activity, 0).await?;

        // No hours entered anywhere in the row.
        timesheet.save_timesheet().await?;
        ensure!(
            !timesheet.is_save_successful().await,
            "saving a row with no assigned time must not succeed"
        );
        Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn hour_cells_reject_invalid_values_and_total_decimals() -> anyhow::Result<()> {
    with_session(
        "hour_cells_reject_invalid_values_and_total_decimals",
        |session| async move {
            let case = load_case::<HoursValidationData>(FixtureFile::Timesheets, "TIMESHEETS_07")?;
            let data = &case.test_data;

            let (timesheet, _employee) = start_as_new_employee(&session).await?;
            create_or_edit(&timesheet).await?;
            prepare_row(&timesheet, &data.project, &data.activity, 0).await?;

            // Out-of-range and non-numeric entries surface an inline error.
            for value in &data.invalid_values {
                timesheet.fill_hours(Weekday::Monday, value, 0).await?;
                ensure!(
                    timesheet.is_hours_error_visible().await,
                    "entering '{value}' into an hour cell should show the format error"
                );
            }

            // Valid decimal hours are accepted and totalled.
            fill_hours(&timesheet, &data.valid_hours, 0).await?;
            timesheet.save_timesheet().await?;
            ensure!(
                timesheet.is_save_successful().await,
                "valid decimal hours should save cleanly"
            );

            timesheet.expect_row_total(0, &data.expected_row_total).await?;
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn creating_a_future_week_timesheet_is_disabled() -> anyhow::Result<()> {
    with_session(
        "creating_a_future_week_timesheet_is_disabled",
        |session| async move {
            let (timesheet, _employee) = start_as_new_employee(&session).await?;

            timesheet.go_to_next_week().await?;
            ensure!(
                timesheet.is_create_timesheet_button_disabled().await?,
                "the Create Timesheet button must be disabled for a future week"
            );
            Ok(())
        },
    )
    .await
}
