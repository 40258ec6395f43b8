// Suite configuration
//
// One configuration source for the whole suite, loaded from the environment
// (a `.env` file is honored) with defaults matching the public OrangeHRM demo.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default target instance (public OrangeHRM demo)
pub const DEFAULT_BASE_URL: &str = "https://opensource-demo.orangehrmlive.com/";

/// Default WebDriver endpoint (geckodriver/chromedriver/selenium standalone)
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Default wait for elements to appear (seconds)
pub const DEFAULT_WAIT_SECS: u64 = 15;

/// Default wait for search results / short-lived UI states (seconds)
pub const SEARCH_RESULT_WAIT_SECS: u64 = 5;

/// A username/password pair for one application account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Which browser the WebDriver endpoint should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    /// Firefox via geckodriver (the suite's historical default)
    #[default]
    Firefox,
    /// Chrome/Chromium via chromedriver
    Chrome,
}

impl BrowserKind {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "firefox" => Ok(Self::Firefox),
            "chrome" | "chromium" => Ok(Self::Chrome),
            other => Err(Error::Config(format!(
                "unknown browser '{other}' (expected 'firefox' or 'chrome')"
            ))),
        }
    }
}

/// Suite configuration, injected into sessions and page objects.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the application under test (trailing slash required for joins)
    pub base_url: Url,
    /// WebDriver endpoint the browser session is created against
    pub webdriver_url: String,
    pub browser: BrowserKind,
    pub headless: bool,
    /// Admin account (doubles as the supervisor in timesheet flows)
    pub admin: Credentials,
    /// ESS employee account
    pub employee: Credentials,
    /// Wait for elements to appear
    pub default_wait: Duration,
    /// Wait for search results / transient UI
    pub search_wait: Duration,
    pub screenshots_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            browser: BrowserKind::default(),
            headless: false,
            admin: Credentials::new("admin", "admin123"),
            employee: Credentials::new("john.done", "admin123"),
            default_wait: Duration::from_secs(DEFAULT_WAIT_SECS),
            search_wait: Duration::from_secs(SEARCH_RESULT_WAIT_SECS),
            screenshots_dir: PathBuf::from("screenshots"),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `HRM_BASE_URL`, `HRM_WEBDRIVER_URL`, `HRM_BROWSER`,
    /// `HRM_HEADLESS`, `HRM_ADMIN_USERNAME`, `HRM_ADMIN_PASSWORD`,
    /// `HRM_EMPLOYEE_USERNAME`, `HRM_EMPLOYEE_PASSWORD`, `HRM_DEFAULT_WAIT_SECS`,
    /// `HRM_SEARCH_WAIT_SECS`, `HRM_SCREENSHOTS_DIR`, `HRM_REPORTS_DIR`.
    pub fn from_env() -> Result<Self> {
        // Best effort; absence of a .env file is not an error.
        let _ = dotenvy::dotenv();

        let mut config = Config::default();

        if let Some(raw) = env_var("HRM_BASE_URL") {
            // Paths are joined relative to the base, so it must end in '/'.
            let normalized = if raw.ends_with('/') {
                raw
            } else {
                format!("{raw}/")
            };
            config.base_url = Url::parse(&normalized)
                .map_err(|e| Error::Config(format!("invalid HRM_BASE_URL: {e}")))?;
        }
        if let Some(value) = env_var("HRM_WEBDRIVER_URL") {
            config.webdriver_url = value;
        }
        if let Some(value) = env_var("HRM_BROWSER") {
            config.browser = BrowserKind::parse(&value)?;
        }
        if let Some(value) = env_var("HRM_HEADLESS") {
            config.headless = parse_bool("HRM_HEADLESS", &value)?;
        }
        if let Some(value) = env_var("HRM_ADMIN_USERNAME") {
            config.admin.username = value;
        }
        if let Some(value) = env_var("HRM_ADMIN_PASSWORD") {
            config.admin.password = value;
        }
        if let Some(value) = env_var("HRM_EMPLOYEE_USERNAME") {
            config.employee.username = value;
        }
        if let Some(value) = env_var("HRM_EMPLOYEE_PASSWORD") {
            config.employee.password = value;
        }
        if let Some(value) = env_var("HRM_DEFAULT_WAIT_SECS") {
            config.default_wait = Duration::from_secs(parse_secs("HRM_DEFAULT_WAIT_SECS", &value)?);
        }
        if let Some(value) = env_var("HRM_SEARCH_WAIT_SECS") {
            config.search_wait = Duration::from_secs(parse_secs("HRM_SEARCH_WAIT_SECS", &value)?);
        }
        if let Some(value) = env_var("HRM_SCREENSHOTS_DIR") {
            config.screenshots_dir = PathBuf::from(value);
        }
        if let Some(value) = env_var("HRM_REPORTS_DIR") {
            config.reports_dir = PathBuf::from(value);
        }

        Ok(config)
    }

    /// Resolves a path relative to the application base URL.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("cannot join '{path}' onto base URL: {e}")))
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("invalid {name} value '{other}'"))),
    }
}

fn parse_secs(name: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|e| Error::Config(format!("invalid {name} value '{value}': {e}")))
}
