// Dashboard page

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const USER_DROPDOWN: Selector = Selector::css(".oxd-userdropdown-tab");
const LOGOUT_LINK: Selector = Selector::xpath("//a[normalize-space()='Logout']");
const PIM_MODULE: Selector = Selector::xpath("//a[.//span[text()='PIM']]");
const TIME_MODULE: Selector = Selector::xpath("//a[.//span[text()='Time']]");

/// Page object for the post-login dashboard.
pub struct DashboardPage {
    base: BasePage,
}

impl DashboardPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Opens the PIM module from the sidebar.
    pub async fn navigate_to_pim(&self) -> Result<()> {
        self.base.click(&PIM_MODULE).await
    }

    /// Opens the Time module from the sidebar.
    pub async fn navigate_to_time(&self) -> Result<()> {
        self.base.click(&TIME_MODULE).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Logs out through the user dropdown.
    pub async fn logout(&self) -> Result<()> {
        self.base.click(&USER_DROPDOWN).await?;
        self.base.click(&LOGOUT_LINK).await
    }

    /// Whether the user dropdown is visible (the login-success signal).
    pub async fn is_user_dropdown_visible(&self) -> bool {
        self.base.is_visible(&USER_DROPDOWN).await
    }
}
