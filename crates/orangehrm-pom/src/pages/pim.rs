// PIM (employee management) page

use crate::error::Result;
use crate::pages::{BasePage, Selector};

const ADD_EMPLOYEE_BUTTON: Selector = Selector::xpath("//a[normalize-space()='Add Employee']");
const EMPLOYEE_NAME_INPUT: Selector =
    Selector::xpath("//label[text()='Employee Name']/../following-sibling::div//input");
const SEARCH_BUTTON: Selector = Selector::css(r#"button[type="submit"]"#);
const NO_RECORDS_FOUND_MESSAGE: Selector = Selector::xpath("//*[text()='No Records Found']");
const FIRST_ROW_CELL: Selector = Selector::css(".oxd-table-card .oxd-table-row .oxd-table-cell");
const ROW_ITEMS: Selector = Selector::css(".oxd-table-card");
const AUTOCOMPLETE_OPTIONS: Selector = Selector::css(".oxd-autocomplete-option");
const LOADING_SPINNER: Selector = Selector::css(".oxd-loading-spinner");

/// Page object for the PIM employee list.
pub struct PimPage {
    base: BasePage,
}

impl PimPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Searches for an employee by name, picking the matching autocomplete
    /// option when one appears.
    pub async fn search_for_employee(&self, employee_name: &str) -> Result<()> {
        tracing::info!("Searching for employee: {employee_name}");
        self.base.type_into(&EMPLOYEE_NAME_INPUT, employee_name).await?;

        let search_wait = self.base.config().search_wait;
        if self.base.is_visible_within(&AUTOCOMPLETE_OPTIONS, search_wait).await {
            let options = self.base.find_all(&AUTOCOMPLETE_OPTIONS).await?;
            for option in options {
                let text = option.text().await.unwrap_or_default();
                if text.to_lowercase().contains(&employee_name.to_lowercase()) {
                    tracing::info!("Selecting autocomplete option: {text}");
                    option.click().await?;
                    break;
                }
            }
        } else {
            tracing::info!("No autocomplete options found, proceeding with search");
        }

        self.base.click(&SEARCH_BUTTON).await?;
        self.wait_for_loading_to_complete().await;
        Ok(())
    }

    /// Waits for the loading spinner to disappear, if one shows up at all.
    async fn wait_for_loading_to_complete(&self) {
        let search_wait = self.base.config().search_wait;
        if !self.base.wait_until_hidden(&LOADING_SPINNER, search_wait).await {
            tracing::debug!("No loading spinner detected or already completed");
        }
    }

    /// Whether the search came back empty.
    pub async fn is_no_records_found_visible(&self) -> Result<bool> {
        let toast_visible = self.base.is_visible(&NO_RECORDS_FOUND_MESSAGE).await;
        let items = self.base.find_all(&ROW_ITEMS).await?;
        tracing::info!(
            "'No Records Found' visibility: {toast_visible}, result rows: {}",
            items.len()
        );
        Ok(toast_visible || items.is_empty())
    }

    /// Text of the first result row cell.
    pub async fn first_row_text(&self) -> Result<String> {
        self.base.text_of(&FIRST_ROW_CELL).await
    }

    /// Whether any search results are rendered.
    pub async fn has_search_results(&self) -> bool {
        self.base.is_visible(&FIRST_ROW_CELL).await
    }

    /// Opens the Add Employee screen from the toolbar.
    pub async fn click_add_employee(&self) -> Result<()> {
        tracing::info!("Navigating to Add Employee page");
        self.base.click(&ADD_EMPLOYEE_BUTTON).await
    }
}
