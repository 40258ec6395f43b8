// Project management page (Time module)

use thirtyfour::Key;

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const PROJECT_LIST_URL: &str = "time/viewProjects";

const ADD_PROJECT_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Add']");
const PROJECT_NAME_INPUT: Selector =
    Selector::xpath("//label[text()='Name']/parent::div/following-sibling::div//input");
const CUSTOMER_NAME_INPUT: Selector =
    Selector::xpath("//label[text()='Customer Name']/parent::div/following-sibling::div//input");
const PROJECT_ADMIN_INPUT: Selector =
    Selector::xpath("//label[text()='Project Admin']/parent::div/following-sibling::div//input");
const DESCRIPTION_TEXTAREA: Selector =
    Selector::xpath("//label[text()='Description']/parent::div/following-sibling::div//textarea");
const SAVE_BUTTON: Selector = Selector::css(r#"button[type="submit"]"#);
const CANCEL_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Cancel']");

const REQUIRED_ERROR_MESSAGE: Selector = Selector::css(".oxd-input-field-error-message");
const ERROR_MESSAGE_REQUIRED: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Required']",
);
const ERROR_MESSAGE_DUPLICATE: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Already exists']",
);
const ERROR_MESSAGE_EXCEEDS_LIMIT: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Should not exceed 50 characters']",
);

const SUCCESS_MESSAGE: Selector = Selector::css(".oxd-toast-content--success");

const PROJECT_TABLE_ROWS: Selector = Selector::css(".oxd-table-body .oxd-table-card");
const NO_RECORDS_MESSAGE: Selector = Selector::xpath(
    "//div[contains(@class, 'orangehrm-horizontal-padding')]//span[text()='No Records Found']",
);

const SEARCH_PROJECT_INPUT: Selector =
    Selector::xpath("//label[text()='Project']/parent::div/following-sibling::div//input");
const SEARCH_CUSTOMER_INPUT: Selector =
    Selector::xpath("//label[text()='Customer Name']/parent::div/following-sibling::div//input");
const SEARCH_ADMIN_INPUT: Selector =
    Selector::xpath("//label[text()='Project Admin']/parent::div/following-sibling::div//input");

const LISTBOX_OPTIONS: Selector = Selector::xpath("//div[@role='listbox']//div[@role='option']");
const CONFIRM_DELETE_BUTTON: Selector =
    Selector::xpath("//button[contains(@class, 'oxd-button--label-danger')]");

fn listbox_option(text: &str) -> Selector {
    Selector::xpath_owned(format!(
        "//div[@role='listbox']//div[@role='option']//span[contains(text(), '{text}')]"
    ))
}

fn table_cell_with_text(text: &str) -> Selector {
    Selector::xpath_owned(format!(
        "//div[contains(@class, 'oxd-table-card')]//div[text()='{text}']"
    ))
}

fn row_action_button(row_text: &str, icon: &str) -> Selector {
    Selector::xpath_owned(format!(
        "//div[contains(@class, 'oxd-table-card')]//div[text()='{row_text}']\
         /ancestor::div[contains(@class, 'oxd-table-card')]//button//i[contains(@class, '{icon}')]"
    ))
}

/// Page object for Project management in the Time module.
pub struct ProjectPage {
    base: BasePage,
}

impl ProjectPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Navigates to the project list.
    pub async fn open(&self) -> Result<()> {
        tracing::info!("Navigating to Project page");
        self.base.goto_path(PROJECT_LIST_URL).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn click_add_project(&self) -> Result<()> {
        tracing::info!("Clicking Add Project button");
        self.base.click(&ADD_PROJECT_BUTTON).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn enter_project_name(&self, name: &str) -> Result<()> {
        tracing::info!("Entering project name: {name}");
        self.base.type_into(&PROJECT_NAME_INPUT, name).await
    }

    /// Selects a customer through the autocomplete dropdown.
    pub async fn select_customer(&self, customer_name: &str) -> Result<()> {
        tracing::info!("Selecting customer: {customer_name}");
        let prefix: String = customer_name.chars().take(3).collect();
        self.base.type_into(&CUSTOMER_NAME_INPUT, &prefix).await?;
        self.base.pause(1000).await;

        let option = listbox_option(customer_name);
        if self.base.is_visible(&option).await {
            self.base.click(&option).await?;
        } else {
            tracing::warn!("Customer '{customer_name}' not found in dropdown");
        }
        Ok(())
    }

    /// Selects a project admin: type to trigger autocomplete, then pick the
    /// first suggestion with the keyboard.
    pub async fn select_project_admin(&self, admin_name: &str) -> Result<()> {
        tracing::info!("Selecting project admin: {admin_name}");
        let input = self.base.find(&PROJECT_ADMIN_INPUT).await?;
        input.clear().await?;
        input.send_keys(admin_name).await?;
        self.base.pause(1500).await;

        self.base.press(&input, Key::Down).await?;
        self.base.pause(300).await;
        self.base.press(&input, Key::Enter).await?;
        self.base.pause(500).await;
        Ok(())
    }

    pub async fn enter_description(&self, description: &str) -> Result<()> {
        self.base.type_into(&DESCRIPTION_TEXTAREA, description).await
    }

    pub async fn click_save(&self) -> Result<()> {
        tracing::info!("Clicking Save button");
        self.base.click(&SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    pub async fn click_cancel(&self) -> Result<()> {
        self.base.click(&CANCEL_BUTTON).await
    }

    /// Adds a project with its required customer plus optional admin and
    /// description.
    pub async fn add_project(
        &self,
        name: &str,
        customer_name: &str,
        admin_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        tracing::info!("Adding project: {name} for customer: {customer_name}");
        self.click_add_project().await?;
        self.enter_project_name(name).await?;
        self.select_customer(customer_name).await?;
        if let Some(admin) = admin_name {
            self.select_project_admin(admin).await?;
        }
        if let Some(text) = description {
            self.enter_description(text).await?;
        }
        self.click_save().await
    }

    pub async fn is_success_message_visible(&self) -> bool {
        self.base.is_visible(&SUCCESS_MESSAGE).await
    }

    pub async fn is_required_error_visible(&self) -> bool {
        self.base.is_visible(&ERROR_MESSAGE_REQUIRED).await
    }

    pub async fn is_duplicate_error_visible(&self) -> bool {
        self.base.is_visible(&ERROR_MESSAGE_DUPLICATE).await
    }

    pub async fn is_exceeds_limit_error_visible(&self) -> bool {
        self.base.is_visible(&ERROR_MESSAGE_EXCEEDS_LIMIT).await
    }

    /// All inline field error texts currently rendered.
    pub async fn required_error_messages(&self) -> Result<Vec<String>> {
        self.base.pause(1000).await;
        let elements = self.base.find_all(&REQUIRED_ERROR_MESSAGE).await?;
        let mut messages = Vec::new();
        for element in elements {
            messages.push(element.text().await.unwrap_or_default());
        }
        Ok(messages)
    }

    /// Searches the list by project name through the filter autocomplete.
    pub async fn search_project(&self, project_name: &str) -> Result<()> {
        tracing::info!("Searching for project: {project_name}");
        self.base.type_into(&SEARCH_PROJECT_INPUT, project_name).await?;

        let option = listbox_option(project_name);
        if self.base.is_visible(&option).await {
            self.base.click(&option).await?;
        } else {
            tracing::warn!("Project '{project_name}' not found in search dropdown");
        }

        self.base.click(&SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Filters the list by customer.
    pub async fn search_by_customer(&self, customer_name: &str) -> Result<()> {
        tracing::info!("Filtering projects by customer: {customer_name}");
        let prefix: String = customer_name.chars().take(3).collect();
        self.base.type_into(&SEARCH_CUSTOMER_INPUT, &prefix).await?;
        self.base.pause(1000).await;

        let option = listbox_option(customer_name);
        if self.base.is_visible(&option).await {
            self.base.click(&option).await?;
        }

        self.base.click(&SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Filters the list by project admin.
    pub async fn search_by_project_admin(&self, admin_name: &str) -> Result<()> {
        tracing::info!("Filtering projects by admin: {admin_name}");
        let prefix: String = admin_name.chars().take(3).collect();
        self.base.type_into(&SEARCH_ADMIN_INPUT, &prefix).await?;
        self.base.pause(1000).await;

        let option = listbox_option(admin_name);
        if self.base.is_visible(&option).await {
            self.base.click(&option).await?;
        }

        self.base.click(&SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Whether the project shows up in the list table.
    pub async fn is_project_in_table(&self, project_name: &str) -> Result<bool> {
        self.base.pause(1000).await;
        if self.base.is_visible(&NO_RECORDS_MESSAGE).await {
            return Ok(false);
        }

        let rows = self.base.find_all(&PROJECT_TABLE_ROWS).await?;
        for row in rows {
            let text = row.text().await.unwrap_or_default();
            if text.contains(project_name) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of rows in the project table (0 when the list is empty).
    pub async fn table_row_count(&self) -> Result<usize> {
        if self.base.is_visible(&NO_RECORDS_MESSAGE).await {
            return Ok(0);
        }
        Ok(self.base.find_all(&PROJECT_TABLE_ROWS).await?.len())
    }

    /// Opens the edit form for a project row.
    pub async fn click_edit_project(&self, project_name: &str) -> Result<()> {
        tracing::info!("Clicking edit for project: {project_name}");
        let row = table_cell_with_text(project_name);
        if self.base.is_visible(&row).await {
            let edit_button = row_action_button(project_name, "bi-pencil");
            self.base.click(&edit_button).await?;
            self.base.pause(1000).await;
        }
        Ok(())
    }

    /// Renames a project through the edit form.
    pub async fn edit_project_name(&self, old_name: &str, new_name: &str) -> Result<()> {
        tracing::info!("Editing project '{old_name}' to '{new_name}'");
        self.click_edit_project(old_name).await?;
        self.enter_project_name(new_name).await?;
        self.click_save().await
    }

    /// Reassigns a project to a different customer through the edit form.
    pub async fn edit_project_customer(&self, project_name: &str, new_customer: &str) -> Result<()> {
        tracing::info!("Editing project '{project_name}' customer to '{new_customer}'");
        self.click_edit_project(project_name).await?;
        self.select_customer(new_customer).await?;
        self.click_save().await
    }

    /// Deletes a project row, confirming the dialog when it appears.
    pub async fn delete_project(&self, project_name: &str) -> Result<()> {
        tracing::info!("Deleting project: {project_name}");
        let row = table_cell_with_text(project_name);
        if self.base.is_visible(&row).await {
            let delete_button = row_action_button(project_name, "bi-trash");
            self.base.click(&delete_button).await?;
            self.base.pause(1000).await;

            if self.base.is_visible(&CONFIRM_DELETE_BUTTON).await {
                self.base.click(&CONFIRM_DELETE_BUTTON).await?;
                self.base.pause(2000).await;
            }
        }
        Ok(())
    }

    /// All customer names offered by the Add Project customer dropdown.
    pub async fn customer_dropdown_options(&self) -> Result<Vec<String>> {
        tracing::info!("Getting customer dropdown options");
        self.click_add_project().await?;
        self.base.click(&CUSTOMER_NAME_INPUT).await?;
        self.base.pause(1000).await;

        let options = self.base.find_all(&LISTBOX_OPTIONS).await?;
        let mut names = Vec::new();
        for option in options {
            let text = option.text().await.unwrap_or_default();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                names.push(trimmed.to_string());
            }
        }

        self.click_cancel().await?;
        Ok(names)
    }
}
