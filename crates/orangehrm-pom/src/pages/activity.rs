// Activity management (inside a project's edit screen)
//
// Activities live in a section of the project edit form, so every operation
// starts by opening the parent project for edit.

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const PROJECT_LIST_URL: &str = "time/viewProjects";

const ADD_ACTIVITY_BUTTON: Selector =
    Selector::xpath("//h6[text()='Activities']/following::button[contains(., 'Add')][1]");
const ACTIVITY_NAME_INPUT: Selector = Selector::xpath(
    "//h6[text()='Activities']/following::form//label[text()='Name']/parent::div/following-sibling::div//input",
);
const ACTIVITY_SAVE_BUTTON: Selector =
    Selector::xpath("//h6[text()='Activities']/following::form//button[@type='submit']");

const ERROR_MESSAGE_REQUIRED: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Required']",
);
const ERROR_MESSAGE_DUPLICATE: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Already exists']",
);
const ERROR_MESSAGE_EXCEEDS_LIMIT: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and contains(text(), 'Should not exceed')]",
);
const REQUIRED_ERROR_MESSAGE: Selector = Selector::css(".oxd-input-field-error-message");

const SUCCESS_MESSAGE: Selector = Selector::css(".oxd-toast-content--success");
const NO_RECORDS_MESSAGE: Selector = Selector::xpath(
    "//div[contains(@class, 'orangehrm-horizontal-padding')]//span[text()='No Records Found']",
);
const CONFIRM_DELETE_BUTTON: Selector =
    Selector::xpath("//button[contains(@class, 'oxd-button--label-danger')]");

fn table_cell_with_text(text: &str) -> Selector {
    Selector::xpath_owned(format!(
        "//div[contains(@class, 'oxd-table-cell')]//div[text()='{text}']"
    ))
}

fn row_action_button(row_text: &str, icon: &str) -> Selector {
    Selector::xpath_owned(format!(
        "//div[contains(@class, 'oxd-table-card')]//div[text()='{row_text}']\
         /ancestor::div[contains(@class, 'oxd-table-card')]//button//i[contains(@class, '{icon}')]"
    ))
}

/// Page object for managing a project's activities.
pub struct ActivityPage {
    base: BasePage,
}

impl ActivityPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Navigates to the project list.
    pub async fn open_project_list(&self) -> Result<()> {
        tracing::info!("Navigating to Project list page");
        self.base.goto_path(PROJECT_LIST_URL).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    /// Finds a project row in the list and opens its edit screen.
    pub async fn open_project_for_edit(&self, project_name: &str) -> Result<()> {
        tracing::info!("Searching and editing project: {project_name}");
        let row = Selector::xpath_owned(format!(
            "//div[contains(@class, 'oxd-table-card')]//div[text()='{project_name}']"
        ));
        if self.base.is_visible(&row).await {
            let edit_button = row_action_button(project_name, "bi-pencil");
            self.base.click(&edit_button).await?;
            self.base.pause(1000).await;
        } else {
            tracing::warn!("Project '{project_name}' not found");
        }
        Ok(())
    }

    /// Opens the inline add-activity form within the Activities section.
    pub async fn click_add_activity(&self) -> Result<()> {
        tracing::info!("Clicking Add Activity button");
        self.base.click(&ADD_ACTIVITY_BUTTON).await?;
        self.base.pause(1000).await;
        self.base.find(&ACTIVITY_NAME_INPUT).await?;
        Ok(())
    }

    pub async fn enter_activity_name(&self, name: &str) -> Result<()> {
        tracing::info!("Entering activity name: {name}");
        self.base.type_into(&ACTIVITY_NAME_INPUT, name).await
    }

    pub async fn click_save(&self) -> Result<()> {
        tracing::info!("Clicking Save button");
        self.base.click(&ACTIVITY_SAVE_BUTTON).await?;
        self.base.pause(2000).await;
        Ok(())
    }

    /// Adds an activity to the project currently open for edit.
    pub async fn add_activity(&self, project_name: &str, activity_name: &str) -> Result<()> {
        tracing::info!("Adding activity '{activity_name}' to project '{project_name}'");
        self.click_add_activity().await?;
        self.enter_activity_name(activity_name).await?;
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

    /// Whether the activity shows up in the Activities table.
    pub async fn is_activity_in_table(&self, activity_name: &str) -> bool {
        tracing::info!("Checking if activity '{activity_name}' is in table");
        self.base.pause(1000).await;

        if self.base.is_visible(&NO_RECORDS_MESSAGE).await {
            return false;
        }
        self.base.is_visible(&table_cell_with_text(activity_name)).await
    }

    /// Renames an activity through its row's edit button.
    pub async fn edit_activity_name(&self, old_name: &str, new_name: &str) -> Result<()> {
        tracing::info!("Editing activity '{old_name}' to '{new_name}'");
        let row = table_cell_with_text(old_name);
        if self.base.is_visible(&row).await {
            let edit_button = row_action_button(old_name, "bi-pencil");
            self.base.click(&edit_button).await?;
            self.base.pause(1000).await;
            self.enter_activity_name(new_name).await?;
            self.click_save().await?;
        }
        Ok(())
    }

    /// Deletes an activity row, confirming the dialog when it appears.
    pub async fn delete_activity(&self, activity_name: &str) -> Result<()> {
        tracing::info!("Deleting activity: {activity_name}");
        let row = table_cell_with_text(activity_name);
        if self.base.is_visible(&row).await {
            let delete_button = row_action_button(activity_name, "bi-trash");
            self.base.click(&delete_button).await?;
            self.base.pause(1000).await;

            if self.base.is_visible(&CONFIRM_DELETE_BUTTON).await {
                self.base.click(&CONFIRM_DELETE_BUTTON).await?;
                self.base.pause(2000).await;
            }
        }
        Ok(())
    }

    /// Scrolls the activities section into view.
    pub async fn scroll_to_activity_list(&self) -> Result<()> {
        tracing::info!("Scrolling to activity list section");
        self.base
            .driver()
            .execute("window.scrollBy(0, 500);", Vec::new())
            .await?;
        self.base.pause(1000).await;
        Ok(())
    }
}
