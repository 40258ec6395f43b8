// Test harness
//
// Session lifecycle around a test body (with a failure screenshot on the way
// out), serial actor switching, and the small helpers the scripted flows
// share: unique entity names and per-run employee accounts.

use std::future::Future;
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use orangehrm_pom::pages::{AddEmployeePage, LoginPage, TimesheetPage};
use orangehrm_pom::{Config, Credentials, Session};

use crate::workflow::Actor;

static TRACING_INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("orangehrm_pom=info,orangehrm_e2e=info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

/// Runs a test body inside a fresh browser session.
///
/// On failure a full-page screenshot is captured into the configured
/// screenshots directory before the session is closed; the original error is
/// returned either way.
pub async fn with_session<F, Fut>(test_name: &str, body: F) -> Result<()>
where
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    init_tracing();

    let config = Config::from_env().context("loading suite configuration")?;
    let session = Session::start(config)
        .await
        .context("starting browser session")?;

    let result = body(session.clone()).await;

    if let Err(error) = &result {
        tracing::warn!("Test failed: {test_name}: {error:#}");
        match session.capture_failure_screenshot(test_name).await {
            Ok(path) => tracing::info!("Failure screenshot: {}", path.display()),
            Err(screenshot_error) => {
                tracing::error!("Failed to capture screenshot: {screenshot_error}")
            }
        }
    }

    session.quit().await.context("closing browser session")?;
    result
}

/// A unique-enough name for entities created against the shared demo
/// instance, suffixed with the epoch clock so successive runs do not collide.
pub fn unique_name(prefix: &str) -> String {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() % 100_000)
        .unwrap_or_default();
    format!("{prefix}_{stamp}")
}

/// Logs in from the login page with the given credentials.
pub async fn login(session: &Session, credentials: &Credentials) -> Result<()> {
    let login_page = LoginPage::new(session.base());
    login_page.open().await?;
    login_page
        .login(&credentials.username, &credentials.password)
        .await?;
    Ok(())
}

/// Logs the current actor out so the next one can take over the session.
pub async fn logout(session: &Session) -> Result<()> {
    session.logout().await?;
    Ok(())
}

/// Logs in and lands on the timesheet screen for the given actor: employees
/// get My Timesheet, supervisors get the Employee Timesheet search.
pub async fn login_and_open_timesheet(
    session: &Session,
    credentials: &Credentials,
    actor: Actor,
) -> Result<TimesheetPage> {
    login(session, credentials).await?;
    let timesheet = TimesheetPage::new(session.base());
    match actor {
        Actor::Employee => timesheet.open_my_timesheet().await?,
        Actor::Supervisor => timesheet.open_employee_timesheet().await?,
    }
    Ok(timesheet)
}

/// An ESS account minted for one test run.
#[derive(Debug, Clone)]
pub struct MintedEmployee {
    pub first_name: String,
    pub last_name: String,
    pub credentials: Credentials,
}

impl MintedEmployee {
    /// Display name as the application renders it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Creates a throwaway employee with an enabled login, as the admin, then
/// logs the admin out. Timesheet flows start from the returned credentials so
/// each run owns a clean, empty timesheet.
pub async fn mint_employee(session: &Session) -> Result<MintedEmployee> {
    let admin = session.config().admin.clone();
    login(session, &admin).await?;

    let add_employee = AddEmployeePage::new(session.base());
    add_employee.open().await?;

    let first_name = "mock".to_string();
    let last_name = unique_name("user");
    let username = unique_name("mock");
    let password = "E2e!Passw0rd".to_string();

    add_employee
        .add_employee_with_login(&first_name, &last_name, &username, &password, true)
        .await?;
    anyhow::ensure!(
        add_employee.is_on_personal_details_page().await,
        "employee '{username}' was not created"
    );

    logout(session).await?;

    Ok(MintedEmployee {
        first_name,
        last_name,
        credentials: Credentials::new(username, password),
    })
}
