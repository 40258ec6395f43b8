// Timesheet workflow state machine
//
// The one real contract this suite exercises: which actor may apply which
// action in which status, and where the timesheet lands afterwards. Tests
// derive their expected statuses from this table instead of repeating string
// literals, so a test that disagrees with the model fails loudly.

use orangehrm_pom::pages::TimesheetStatus;

/// Who is driving the browser for a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Employee,
    Supervisor,
}

/// Actions observable through the timesheet UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesheetAction {
    /// Create the week's timesheet (employee, week must not be in the future)
    Create,
    /// Save a row's project/activity/hours (employee, editable statuses only)
    SaveRow,
    /// Submit for approval (employee, needs at least one valid nonzero hour)
    Submit,
    /// Approve a submitted timesheet (supervisor of the employee)
    Approve,
    /// Reject a submitted timesheet with a comment (supervisor)
    Reject,
}

/// Applies an action to a status.
///
/// Returns the resulting status, or `None` when the actor/action pair is not
/// permitted in that status. A resubmit after rejection is `Submit` applied to
/// the `NotSubmitted` status the rejection produced.
pub fn apply(
    status: Option<TimesheetStatus>,
    action: TimesheetAction,
    actor: Actor,
) -> Option<TimesheetStatus> {
    use TimesheetAction::*;
    use TimesheetStatus::*;

    match (status, action, actor) {
        // No timesheet yet: only the employee can create one.
        (None, Create, Actor::Employee) => Some(NotSubmitted),

        // Editing and submitting require an editable sheet.
        (Some(NotSubmitted), SaveRow, Actor::Employee) => Some(NotSubmitted),
        (Some(NotSubmitted), Submit, Actor::Employee) => Some(Submitted),

        // Review happens only on a submitted sheet.
        (Some(Submitted), Approve, Actor::Supervisor) => Some(Approved),
        // Rejection returns the sheet to the employee for editing.
        (Some(Submitted), Reject, Actor::Supervisor) => Some(NotSubmitted),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TimesheetAction::*;
    use TimesheetStatus::*;

    #[test]
    fn happy_path_walks_create_submit_approve() {
        let status = apply(None, Create, Actor::Employee);
        assert_eq!(status, Some(NotSubmitted));

        let status = apply(status, SaveRow, Actor::Employee);
        assert_eq!(status, Some(NotSubmitted));

        let status = apply(status, Submit, Actor::Employee);
        assert_eq!(status, Some(Submitted));

        let status = apply(status, Approve, Actor::Supervisor);
        assert_eq!(status, Some(Approved));
    }

    #[test]
    fn rejection_cycles_back_to_not_submitted_and_can_resubmit() {
        let status = apply(Some(Submitted), Reject, Actor::Supervisor);
        assert_eq!(status, Some(NotSubmitted));

        // The resubmit is an ordinary submit from the rejected-then-editable state.
        let status = apply(status, SaveRow, Actor::Employee);
        let status = apply(status, Submit, Actor::Employee);
        assert_eq!(status, Some(Submitted));

        let status = apply(status, Approve, Actor::Supervisor);
        assert_eq!(status, Some(Approved));
    }

    #[test]
    fn approve_never_succeeds_on_an_unsubmitted_timesheet() {
        assert_eq!(apply(Some(NotSubmitted), Approve, Actor::Supervisor), None);
        assert_eq!(apply(None, Approve, Actor::Supervisor), None);
    }

    #[test]
    fn approved_is_terminal() {
        for action in [Create, SaveRow, Submit, Approve, Reject] {
            for actor in [Actor::Employee, Actor::Supervisor] {
                assert_eq!(apply(Some(Approved), action, actor), None);
            }
        }
    }

    #[test]
    fn actors_cannot_use_each_others_transitions() {
        // Employees cannot review.
        assert_eq!(apply(Some(Submitted), Approve, Actor::Employee), None);
        assert_eq!(apply(Some(Submitted), Reject, Actor::Employee), None);
        // Supervisors cannot edit or submit on the employee's behalf.
        assert_eq!(apply(Some(NotSubmitted), SaveRow, Actor::Supervisor), None);
        assert_eq!(apply(Some(NotSubmitted), Submit, Actor::Supervisor), None);
        assert_eq!(apply(None, Create, Actor::Supervisor), None);
    }

    #[test]
    fn submitted_sheets_are_locked_for_the_employee() {
        assert_eq!(apply(Some(Submitted), SaveRow, Actor::Employee), None);
        assert_eq!(apply(Some(Submitted), Submit, Actor::Employee), None);
    }

    #[test]
    fn create_requires_a_missing_timesheet() {
        assert_eq!(apply(Some(NotSubmitted), Create, Actor::Employee), None);
        assert_eq!(apply(Some(Submitted), Create, Actor::Employee), None);
    }
}
