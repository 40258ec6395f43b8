// Activity CRUD inside a project's edit screen

use anyhow::ensure;

use orangehrm_e2e::fixtures::{load_case, ActivityData, FixtureFile};
use orangehrm_e2e::harness::{login, unique_name, with_session};
use orangehrm_pom::pages::{ActivityPage, ProjectPage};
use orangehrm_pom::Session;

/// Logs in as admin, creates a host project for activities, and opens it for
/// edit. Returns the activity page and the project name.
async fn open_project_with_activities(session: &Session) -> anyhow::Result<(ActivityPage, String)> {
    let admin = session.config().admin.clone();
    login(session, &admin).await?;

    let projects = ProjectPage::new(session.base());
    projects.open().await?;

    let project_name = unique_name("TestProject_Activity");
    projects.add_project(&project_name, "ACME Ltd", None, None).await?;
    ensure!(
        projects.is_success_message_visible().await,
        "host project '{project_name}' should be created"
    );

    let activities = ActivityPage::new(session.base());
    activities.open_project_list().await?;
    projects.search_project(&project_name).await?;
    activities.open_project_for_edit(&project_name).await?;

    Ok((activities, project_name))
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn add_activity_with_valid_name() -> anyhow::Result<()> {
    with_session("add_activity_with_valid_name", |session| async move {
        let case = load_case::<ActivityData>(FixtureFile::Projects, "ACT_TC01")?;
        let (activities, project_name) = open_project_with_activities(&session).await?;
        let activity_name = unique_name(&case.test_data.activity_name);

        activities.add_activity(&project_name, &activity_name).await?;
        ensure!(
            activities.is_success_message_visible().await,
            "success toast should appear after adding activity '{activity_name}'"
        );

        activities.scroll_to_activity_list().await?;
        ensure!(
            activities.is_activity_in_table(&activity_name).await,
            "activity '{activity_name}' should appear in the activity list"
        );
        Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn add_activity_with_empty_name_shows_required() -> anyhow::Result<()> {
    with_session(
        "add_activity_with_empty_name_shows_required",
        |session| async move {
            let case = load_case::<ActivityData>(FixtureFile::Projects, "ACT_TC02")?;
            let expected_error = case.expected_error.as_deref().unwrap_or("Required");
            let (activities, _) = open_project_with_activities(&session).await?;

            activities.click_add_activity().await?;
            // Name stays empty.
            activities.click_save().await?;

            ensure!(
                activities.is_required_error_visible().await,
                "a '{expected_error}' error should appear for an empty activity name"
            );
            let messages = activities.required_error_messages().await?;
            ensure!(
                messages.iter().any(|m| m.contains(expected_error)),
                "inline errors {messages:?} should contain '{expected_error}'"
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn add_activity_name_exceeding_max_length_shows_error() -> anyhow::Result<()> {
    with_session(
        "add_activity_name_exceeding_max_length_shows_error",
        |session| async move {
            let case = load_case::<ActivityData>(FixtureFile::Projects, "ACT_TC03")?;
            let (activities, _) = open_project_with_activities(&session).await?;

            activities.click_add_activity().await?;
            activities.enter_activity_name(&case.test_data.activity_name).await?;

            ensure!(
                activities.is_exceeds_limit_error_visible().await,
                "a length-exceeded error should appear for a {}-char activity name",
                case.test_data.activity_name.chars().count()
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn add_duplicate_activity_in_same_project_shows_error() -> anyhow::Result<()> {
    with_session(
        "add_duplicate_activity_in_same_project_shows_error",
        |session| async move {
            let case = load_case::<ActivityData>(FixtureFile::Projects, "ACT_TC04")?;
            let (activities, project_name) = open_project_with_activities(&session).await?;
            let activity_name = unique_name(&case.test_data.activity_name);

            activities.add_activity(&project_name, &activity_name).await?;
            ensure!(
                activities.is_success_message_visible().await,
                "the first activity '{activity_name}' should be created"
            );

            activities.click_add_activity().await?;
            activities.enter_activity_name(&activity_name).await?;
            activities.click_save().await?;

            ensure!(
                activities.is_duplicate_error_visible().await,
                "an 'Already exists' error should appear for duplicate activity '{activity_name}'"
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn delete_activity_removes_it_from_the_list() -> anyhow::Result<()> {
    with_session(
        "delete_activity_removes_it_from_the_list",
        |session| async move {
            let (activities, project_name) = open_project_with_activities(&session).await?;
            let activity_name = unique_name("Disposable");

            activities.add_activity(&project_name, &activity_name).await?;
            ensure!(
                activities.is_success_message_visible().await,
                "activity '{activity_name}' should be created before deleting"
            );

            activities.scroll_to_activity_list().await?;
            activities.delete_activity(&activity_name).await?;

            ensure!(
                !activities.is_activity_in_table(&activity_name).await,
                "deleted activity '{activity_name}' should no longer be listed"
            );
            Ok(())
        },
    )
    .await
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and a live OrangeHRM instance"]
async fn edit_activity_name() -> anyhow::Result<()> {
    with_session("edit_activity_name", |session| async move {
        let (activities, project_name) = open_project_with_activities(&session).await?;
        let old_name = unique_name("OldActivity");
        let new_name = unique_name("NewActivity");

        activities.add_activity(&project_name, &old_name).await?;
        ensure!(
            activities.is_success_message_visible().await,
            "activity '{old_name}' should be created before editing"
        );

        activities.scroll_to_activity_list().await?;
        activities.edit_activity_name(&old_name, &new_name).await?;
        ensure!(
            activities.is_success_message_visible().await,
            "success toast should appear after renaming '{old_name}'"
        );

        ensure!(
            activities.is_activity_in_table(&new_name).await,
            "renamed activity '{new_name}' should appear in the activity list"
        );
        Ok(())
    })
    .await
}
