// Auto-retry assertions over live DOM state
//
// Provides an expect() API that polls the page until the expectation holds or
// a timeout elapses. Assertions on rendered state need retry because the
// application updates the DOM asynchronously after navigation and XHR.

use std::time::Duration;

use thirtyfour::WebDriver;

use crate::error::{Error, Result};
use crate::pages::Selector;

/// Default timeout for assertions (5 seconds)
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates an expectation for a selector with auto-retry behavior.
///
/// Assertions retry until they pass or time out (default: 5 seconds).
pub fn expect(driver: &WebDriver, selector: &Selector) -> Expectation {
    Expectation::new(driver.clone(), selector.clone())
}

/// Expectation wraps a selector and provides assertion methods with auto-retry.
pub struct Expectation {
    driver: WebDriver,
    selector: Selector,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self; the expectation is built, chained, then awaited.
#[allow(clippy::wrong_self_convention)]
impl Expectation {
    pub(crate) fn new(driver: WebDriver, selector: Selector) -> Self {
        Self {
            driver,
            selector,
            timeout: DEFAULT_ASSERTION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            negate: false,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that the element is visible.
    pub async fn to_be_visible(self) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let is_visible = probe_visible(&self.driver, &self.selector).await;
            let matches = if self.negate { !is_visible } else { is_visible };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected element '{}' NOT to be visible, but it was visible after {:?}",
                        self.selector.as_str(),
                        self.timeout
                    )
                } else {
                    format!(
                        "Expected element '{}' to be visible, but it was not visible after {:?}",
                        self.selector.as_str(),
                        self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the element is hidden (not visible).
    pub async fn to_be_hidden(self) -> Result<()> {
        // Opposite of to_be_visible; flip negation and reuse the loop.
        let negated = Expectation {
            negate: !self.negate,
            ..self
        };
        negated.to_be_visible().await
    }

    /// Asserts that the element has the exact text content (trimmed).
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let start = std::time::Instant::now();
        let expected = expected.trim();

        loop {
            let actual = probe_text(&self.driver, &self.selector).await;
            let trimmed = actual.as_deref().map(str::trim);
            let matches = match (self.negate, trimmed) {
                (false, Some(text)) => text == expected,
                (true, Some(text)) => text != expected,
                // A missing element never has the text; that satisfies negation.
                (negate, None) => negate,
            };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected element '{}' NOT to have text '{}', but it did after {:?}",
                        self.selector.as_str(),
                        expected,
                        self.timeout
                    )
                } else {
                    format!(
                        "Expected element '{}' to have text '{}', but had '{}' after {:?}",
                        self.selector.as_str(),
                        expected,
                        trimmed.unwrap_or("<element not found>"),
                        self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the element contains the text (substring, trimmed).
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let actual = probe_text(&self.driver, &self.selector).await;
            let trimmed = actual.as_deref().map(str::trim);
            let matches = match (self.negate, trimmed) {
                (false, Some(text)) => text.contains(expected),
                (true, Some(text)) => !text.contains(expected),
                (negate, None) => negate,
            };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected element '{}' NOT to contain text '{}', but it did after {:?}",
                        self.selector.as_str(),
                        expected,
                        self.timeout
                    )
                } else {
                    format!(
                        "Expected element '{}' to contain text '{}', but had '{}' after {:?}",
                        self.selector.as_str(),
                        expected,
                        trimmed.unwrap_or("<element not found>"),
                        self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

async fn probe_visible(driver: &WebDriver, selector: &Selector) -> bool {
    match driver.find(selector.by()).await {
        Ok(element) => element.is_displayed().await.unwrap_or(false),
        Err(_) => false,
    }
}

async fn probe_text(driver: &WebDriver, selector: &Selector) -> Option<String> {
    let element = driver.find(selector.by()).await.ok()?;
    element.text().await.ok()
}
