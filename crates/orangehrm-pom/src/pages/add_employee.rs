// Add Employee page
//
// Creates employees, optionally with login details. The timesheet flows lean
// on this to mint a throwaway ESS account per test run.

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const FIRST_NAME_INPUT: Selector = Selector::css(r#"input[name="firstName"]"#);
const LAST_NAME_INPUT: Selector = Selector::css(r#"input[name="lastName"]"#);
const EMPLOYEE_ID_INPUT: Selector =
    Selector::xpath("//label[text()='Employee Id']/../following-sibling::div//input");

const CREATE_LOGIN_TOGGLE: Selector = Selector::css(".oxd-switch-input");
const USERNAME_INPUT: Selector =
    Selector::xpath("//label[text()='Username']/../following-sibling::div//input");
const PASSWORD_INPUT: Selector =
    Selector::xpath("//label[text()='Password']/../following-sibling::div//input");
const CONFIRM_PASSWORD_INPUT: Selector =
    Selector::xpath("//label[text()='Confirm Password']/../following-sibling::div//input");
const STATUS_ENABLED_RADIO: Selector = Selector::xpath("//label[normalize-space()='Enabled']");
const STATUS_DISABLED_RADIO: Selector = Selector::xpath("//label[normalize-space()='Disabled']");

const SAVE_BUTTON: Selector = Selector::css(r#"button[type="submit"]"#);

const SUCCESS_MESSAGE: Selector = Selector::css(".oxd-toast-content--success");
const REQUIRED_ERROR: Selector = Selector::xpath("//*[contains(@class, 'oxd-input-field-error-message')]");
const PERSONAL_DETAILS_HEADING: Selector = Selector::xpath("//h6[text()='Personal Details']");

/// Page object for the Add Employee screen.
pub struct AddEmployeePage {
    base: BasePage,
}

impl AddEmployeePage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Navigates straight to the Add Employee form.
    pub async fn open(&self) -> Result<()> {
        self.base.goto_path("pim/addEmployee").await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn enter_first_name(&self, first_name: &str) -> Result<()> {
        tracing::info!("Entering first name: {first_name}");
        self.base.type_into(&FIRST_NAME_INPUT, first_name).await
    }

    pub async fn enter_last_name(&self, last_name: &str) -> Result<()> {
        tracing::info!("Entering last name: {last_name}");
        self.base.type_into(&LAST_NAME_INPUT, last_name).await
    }

    /// Reads the auto-generated (or current) employee id.
    pub async fn employee_id(&self) -> Result<String> {
        Ok(self
            .base
            .value_of(&EMPLOYEE_ID_INPUT)
            .await?
            .unwrap_or_default())
    }

    /// Expands the login-details section of the form.
    ///
    /// The switch has no readable checked state through the wrapper label, so
    /// this clicks it once; the form is freshly opened per test and starts
    /// collapsed.
    pub async fn enable_create_login_details(&self) -> Result<()> {
        tracing::info!("Enabling Create Login Details");
        self.base.pause(1000).await;
        self.base.click(&CREATE_LOGIN_TOGGLE).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn enter_username(&self, username: &str) -> Result<()> {
        tracing::info!("Entering username: {username}");
        self.base.type_into(&USERNAME_INPUT, username).await
    }

    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.base.type_into(&PASSWORD_INPUT, password).await
    }

    pub async fn enter_confirm_password(&self, confirm_password: &str) -> Result<()> {
        self.base
            .type_into(&CONFIRM_PASSWORD_INPUT, confirm_password)
            .await
    }

    /// Sets the login status radio to Enabled or Disabled.
    pub async fn set_status_enabled(&self, enabled: bool) -> Result<()> {
        tracing::info!(
            "Setting status to: {}",
            if enabled { "Enabled" } else { "Disabled" }
        );
        let radio = if enabled {
            STATUS_ENABLED_RADIO
        } else {
            STATUS_DISABLED_RADIO
        };
        self.base.click(&radio).await
    }

    pub async fn click_save(&self) -> Result<()> {
        tracing::info!("Clicking Save button");
        self.base.click(&SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    pub async fn is_success_message_visible(&self) -> bool {
        let visible = self
            .base
            .is_visible_within(&SUCCESS_MESSAGE, self.base.config().default_wait)
            .await;
        if visible {
            if let Ok(message) = self.base.text_of(&SUCCESS_MESSAGE).await {
                tracing::info!("Success message displayed: {message}");
            }
        }
        visible
    }

    /// All required-field error messages currently rendered.
    pub async fn required_error_messages(&self) -> Result<Vec<String>> {
        let elements = self.base.find_all(&REQUIRED_ERROR).await?;
        let mut messages = Vec::new();
        for element in elements {
            let text = element.text().await.unwrap_or_default();
            if !text.is_empty() {
                messages.push(text);
            }
        }
        tracing::info!("Required error messages: {messages:?}");
        Ok(messages)
    }

    /// Whether the save redirected to the Personal Details screen.
    pub async fn is_on_personal_details_page(&self) -> bool {
        self.base
            .is_visible_within(&PERSONAL_DETAILS_HEADING, self.base.config().default_wait)
            .await
    }

    /// Adds an employee with basic information only.
    pub async fn add_employee_basic(&self, first_name: &str, last_name: &str) -> Result<()> {
        tracing::info!("Adding employee: {first_name} {last_name}");
        self.enter_first_name(first_name).await?;
        self.enter_last_name(last_name).await?;
        self.click_save().await
    }

    /// Adds an employee together with enabled login credentials.
    pub async fn add_employee_with_login(
        &self,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str,
        status_enabled: bool,
    ) -> Result<()> {
        tracing::info!("Adding employee with login: {first_name} {last_name}, username: {username}");
        self.enter_first_name(first_name).await?;
        self.enter_last_name(last_name).await?;
        self.enable_create_login_details().await?;
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.enter_confirm_password(password).await?;
        self.set_status_enabled(status_enabled).await?;
        self.click_save().await?;
        self.base.pause(1000).await;
        Ok(())
    }
}
