// Customer management page (Time module)

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const CUSTOMER_LIST_URL: &str = "time/viewCustomers";

const ADD_CUSTOMER_BUTTON: Selector = Selector::xpath("//button[normalize-space()='Add']");
const CUSTOMER_NAME_INPUT: Selector =
    Selector::xpath("//label[text()='Name']/parent::div/following-sibling::div//input");
const DESCRIPTION_TEXTAREA: Selector =
    Selector::xpath("//label[text()='Description']/parent::div/following-sibling::div//textarea");
const SAVE_BUTTON: Selector = Selector::css(r#"button[type="submit"]"#);

const REQUIRED_ERROR_MESSAGE: Selector = Selector::css(".oxd-input-field-error-message");
const ERROR_MESSAGE_REQUIRED: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Required']",
);
const ERROR_MESSAGE_EXCEEDS_LIMIT: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Should not exceed 50 characters']",
);
const ERROR_MESSAGE_DUPLICATE: Selector = Selector::xpath(
    "//span[contains(@class, 'oxd-input-field-error-message') and text()='Already exists']",
);

const SUCCESS_MESSAGE: Selector = Selector::css(".oxd-toast-content--success");

const CUSTOMER_TABLE_ROWS: Selector = Selector::css(".oxd-table-body .oxd-table-card");
const TABLE_CELLS: Selector = Selector::css(".oxd-table-cell");
const NO_RECORDS_MESSAGE: Selector = Selector::xpath(
    "//div[contains(@class, 'orangehrm-horizontal-padding')]//span[text()='No Records Found']",
);

/// Validation errors the Add Customer form can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerError {
    Required,
    ExceedsLimit,
    Duplicate,
}

/// Page object for Customer management in the Time module.
pub struct CustomerPage {
    base: BasePage,
}

impl CustomerPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Navigates to the customer list.
    pub async fn open(&self) -> Result<()> {
        tracing::info!("Navigating to Customer page");
        self.base.goto_path(CUSTOMER_LIST_URL).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn click_add_customer(&self) -> Result<()> {
        tracing::info!("Clicking Add Customer button");
        self.base.click(&ADD_CUSTOMER_BUTTON).await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn enter_customer_name(&self, name: &str) -> Result<()> {
        tracing::info!("Entering customer name: {name}");
        self.base.type_into(&CUSTOMER_NAME_INPUT, name).await
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

    /// Adds a customer with a name and optional description.
    pub async fn add_customer(&self, name: &str, description: &str) -> Result<()> {
        tracing::info!("Adding customer: {name}");
        self.click_add_customer().await?;
        self.enter_customer_name(name).await?;
        if !description.is_empty() {
            self.enter_description(description).await?;
        }
        self.click_save().await
    }

    /// Whether the success toast is showing.
    pub async fn is_success_message_visible(&self) -> bool {
        self.base.is_visible(&SUCCESS_MESSAGE).await
    }

    /// Whether a given validation error is showing.
    pub async fn is_error_visible(&self, error: CustomerError) -> bool {
        let selector = match error {
            CustomerError::Required => ERROR_MESSAGE_REQUIRED,
            CustomerError::ExceedsLimit => ERROR_MESSAGE_EXCEEDS_LIMIT,
            CustomerError::Duplicate => ERROR_MESSAGE_DUPLICATE,
        };
        self.base.is_visible(&selector).await
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

    /// Scans the list table for an exact name match.
    pub async fn search_customer(&self, customer_name: &str) -> Result<bool> {
        tracing::info!("Searching for customer: {customer_name}");
        self.base.pause(2000).await;

        let rows = self.base.find_all(&CUSTOMER_TABLE_ROWS).await?;
        for row in rows {
            let cells = row.find_all(TABLE_CELLS.by()).await?;
            // Column 1 holds the name (column 0 is the checkbox).
            if let Some(name_cell) = cells.get(1) {
                let text = name_cell.text().await.unwrap_or_default();
                if text.trim() == customer_name {
                    tracing::info!("Customer '{customer_name}' found in table");
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Whether the customer shows up anywhere in the list table.
    pub async fn is_customer_in_table(&self, customer_name: &str) -> bool {
        tracing::info!("Checking if customer '{customer_name}' is in table");
        self.base.pause(1000).await;

        if self.base.is_visible(&NO_RECORDS_MESSAGE).await {
            return false;
        }

        let cell = Selector::xpath_owned(format!(
            "//div[contains(@class, 'oxd-table-cell') and text()='{customer_name}']"
        ));
        self.base.is_visible(&cell).await
    }
}
