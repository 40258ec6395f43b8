// Login page

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const USERNAME_INPUT: Selector = Selector::css(r#"input[name="username"]"#);
const PASSWORD_INPUT: Selector = Selector::css(r#"input[name="password"]"#);
const LOGIN_BUTTON: Selector = Selector::css(r#"button[type="submit"]"#);
const INVALID_CREDENTIALS_MESSAGE: Selector = Selector::css("p.oxd-alert-content-text");

/// Page object for the login screen.
pub struct LoginPage {
    base: BasePage,
}

impl LoginPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Opens the login page (application root) and lets it settle.
    pub async fn open(&self) -> Result<()> {
        self.base.goto_path("").await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Fills in credentials and submits the form.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        tracing::info!("Logging in as '{username}'");
        self.base.type_into(&USERNAME_INPUT, username).await?;
        self.base.type_into(&PASSWORD_INPUT, password).await?;
        self.base.click(&LOGIN_BUTTON).await?;
        Ok(())
    }

    /// Reads the invalid-credentials alert text.
    pub async fn invalid_credentials_message(&self) -> Result<String> {
        self.base.text_of(&INVALID_CREDENTIALS_MESSAGE).await
    }

    /// Whether the browser is still on the login page.
    pub async fn is_on_login_page(&self) -> Result<bool> {
        let url = self.base.driver().current_url().await?;
        Ok(url.as_str().to_lowercase().contains("login"))
    }
}
