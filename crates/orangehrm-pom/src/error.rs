// Error types for the page-object layer

use thiserror::Error;

/// Result type alias for page-object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the application under test
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the WebDriver endpoint (chromedriver/geckodriver)
    #[error("WebDriver error: {0}")]
    Driver(#[from] thirtyfour::error::WebDriverError),

    /// Element not found by selector
    ///
    /// Raised when waiting for an element exhausts its timeout.
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Assertion timeout (expect API)
    #[error("Assertion timeout: {0}")]
    AssertionTimeout(String),

    /// Invalid or missing configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (screenshot capture, artifact directories)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP error from the auxiliary REST client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
