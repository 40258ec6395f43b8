// Browser session lifecycle
//
// Starts a WebDriver session from the suite configuration, hands out the
// shared BasePage handle the page objects are built from, and captures
// failure screenshots into the configured artifacts directory.

use std::path::PathBuf;
use std::sync::Arc;

use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::config::{BrowserKind, Config};
use crate::error::Result;
use crate::pages::BasePage;

/// One browser session against the application under test.
///
/// Cloning is cheap; all clones share the same underlying WebDriver session.
#[derive(Clone)]
pub struct Session {
    driver: WebDriver,
    config: Arc<Config>,
}

impl Session {
    /// Launches a browser session against the configured WebDriver endpoint.
    pub async fn start(config: Config) -> Result<Self> {
        tracing::info!(
            "Starting {:?} session via {}",
            config.browser,
            config.webdriver_url
        );

        let driver = match config.browser {
            BrowserKind::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if config.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(&config.webdriver_url, caps).await?
            }
            BrowserKind::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if config.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(&config.webdriver_url, caps).await?
            }
        };

        Ok(Self {
            driver,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared page plumbing bound to this session.
    pub fn base(&self) -> BasePage {
        BasePage::new(self.driver.clone(), Arc::clone(&self.config))
    }

    /// Logs the current user out by hitting the logout URL directly.
    ///
    /// Works regardless of which screen is open, which the dropdown-based
    /// logout does not.
    pub async fn logout(&self) -> Result<()> {
        let url = self.config.url_for("auth/logout")?;
        tracing::info!("Logging out via {url}");
        self.driver.goto(url.as_str()).await?;
        Ok(())
    }

    /// Captures a full-page screenshot named `<test>_<timestamp>_failure.png`
    /// under the configured screenshots directory.
    pub async fn capture_failure_screenshot(&self, test_name: &str) -> Result<PathBuf> {
        let dir = self.config.screenshots_dir.clone();
        tokio::fs::create_dir_all(&dir).await?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("{test_name}_{timestamp}_failure.png"));

        let png = self.driver.screenshot_as_png().await?;
        tokio::fs::write(&path, png).await?;
        tracing::info!("Screenshot saved: {}", path.display());
        Ok(path)
    }

    /// Ends the WebDriver session.
    pub async fn quit(self) -> Result<()> {
        tracing::info!("Closing browser session");
        self.driver.quit().await?;
        Ok(())
    }
}
