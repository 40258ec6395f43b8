// Base page abstraction shared by all page objects
//
// Wraps a WebDriver handle plus the suite configuration and provides the
// find/click/type/read/wait primitives the page objects are written against.
// The WebDriver protocol does not auto-detect selector strategies, so
// selectors carry theirs explicitly.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use thirtyfour::{By, Key, WebDriver, WebElement};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::expect::{self, Expectation, DEFAULT_POLL_INTERVAL};

/// A locator with an explicit WebDriver strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Css(Cow<'static, str>),
    XPath(Cow<'static, str>),
}

impl Selector {
    /// CSS selector from a static string (usable in `const` position).
    pub const fn css(selector: &'static str) -> Self {
        Selector::Css(Cow::Borrowed(selector))
    }

    /// XPath selector from a static string (usable in `const` position).
    pub const fn xpath(selector: &'static str) -> Self {
        Selector::XPath(Cow::Borrowed(selector))
    }

    /// XPath built at runtime (row-relative and text-matching locators).
    pub fn xpath_owned(selector: String) -> Self {
        Selector::XPath(Cow::Owned(selector))
    }

    pub fn by(&self) -> By {
        match self {
            Selector::Css(s) => By::Css(s.to_string()),
            Selector::XPath(s) => By::XPath(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selector::Css(s) | Selector::XPath(s) => s.as_ref(),
        }
    }
}

/// Shared plumbing for page objects.
#[derive(Clone)]
pub struct BasePage {
    driver: WebDriver,
    config: Arc<Config>,
}

impl BasePage {
    pub fn new(driver: WebDriver, config: Arc<Config>) -> Self {
        Self { driver, config }
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Navigates to a path relative to the configured base URL.
    pub async fn goto_path(&self, path: &str) -> Result<()> {
        let url = self.config.url_for(path)?;
        tracing::info!("Navigating to {url}");
        self.driver.goto(url.as_str()).await?;
        Ok(())
    }

    /// Finds an element, polling until it appears or the default wait elapses.
    pub async fn find(&self, selector: &Selector) -> Result<WebElement> {
        self.find_within(selector, self.config.default_wait).await
    }

    /// Finds an element within the given wait budget.
    pub async fn find_within(&self, selector: &Selector, timeout: Duration) -> Result<WebElement> {
        tracing::debug!("Finding element: {}", selector.as_str());
        let start = std::time::Instant::now();
        loop {
            match self.driver.find(selector.by()).await {
                Ok(element) => return Ok(element),
                Err(_) if start.elapsed() < timeout => {
                    tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
                }
                Err(_) => return Err(Error::ElementNotFound(selector.as_str().to_string())),
            }
        }
    }

    /// Returns every element currently matching the selector (possibly empty).
    pub async fn find_all(&self, selector: &Selector) -> Result<Vec<WebElement>> {
        tracing::debug!("Finding elements: {}", selector.as_str());
        Ok(self.driver.find_all(selector.by()).await?)
    }

    /// Clicks the element once it appears.
    pub async fn click(&self, selector: &Selector) -> Result<()> {
        tracing::debug!("Clicking element: {}", selector.as_str());
        let element = self.find(selector).await?;
        element.click().await?;
        Ok(())
    }

    /// Clears the field and types the text into it.
    pub async fn type_into(&self, selector: &Selector, text: &str) -> Result<()> {
        tracing::debug!("Typing into element: {}", selector.as_str());
        let element = self.find(selector).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Reads the element's rendered text.
    pub async fn text_of(&self, selector: &Selector) -> Result<String> {
        let element = self.find(selector).await?;
        Ok(element.text().await?)
    }

    /// Reads an attribute from the element.
    pub async fn attr_of(&self, selector: &Selector, attribute: &str) -> Result<Option<String>> {
        let element = self.find(selector).await?;
        Ok(element.attr(attribute).await?)
    }

    /// Reads the element's `value` property (input fields).
    pub async fn value_of(&self, selector: &Selector) -> Result<Option<String>> {
        let element = self.find(selector).await?;
        Ok(element.value().await?)
    }

    /// Whether the element becomes visible within the search wait.
    ///
    /// Degrades to `false` instead of raising; state-query methods on page
    /// objects are built on this.
    pub async fn is_visible(&self, selector: &Selector) -> bool {
        self.is_visible_within(selector, self.config.search_wait).await
    }

    /// Whether the element becomes visible within the given wait.
    pub async fn is_visible_within(&self, selector: &Selector, timeout: Duration) -> bool {
        let visible = self
            .expect(selector)
            .with_timeout(timeout)
            .to_be_visible()
            .await
            .is_ok();
        if !visible {
            tracing::debug!("Element not visible: {}", selector.as_str());
        }
        visible
    }

    /// Whether the element disappears within the given wait.
    pub async fn wait_until_hidden(&self, selector: &Selector, timeout: Duration) -> bool {
        let hidden = self
            .expect(selector)
            .with_timeout(timeout)
            .to_be_hidden()
            .await
            .is_ok();
        if !hidden {
            tracing::warn!("Element did not disappear: {}", selector.as_str());
        }
        hidden
    }

    /// Auto-retry assertion builder for the selector.
    pub fn expect(&self, selector: &Selector) -> Expectation {
        expect::expect(&self.driver, selector)
    }

    /// Sends a single control key to the element (autocomplete navigation,
    /// committing hour cells with Tab).
    pub async fn press(&self, element: &WebElement, key: Key) -> Result<()> {
        element.send_keys(key + "").await?;
        Ok(())
    }

    /// Fixed settle pause for UI states with no reliable completion signal
    /// (dropdown population, toast animation).
    pub async fn pause(&self, millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
