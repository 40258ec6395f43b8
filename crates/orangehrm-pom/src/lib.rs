//! orangehrm-pom: Page objects and session plumbing for the OrangeHRM e2e suite
//!
//! This crate wraps the screens of the OrangeHRM application behind typed page
//! objects built on a WebDriver session, plus the supporting pieces a UI suite
//! needs: environment-driven configuration, auto-retry expectations, failure
//! screenshots, and a small REST client for auxiliary lookups.
//!
//! # Example
//!
//! ```ignore
//! use orangehrm_pom::{Config, Session};
//! use orangehrm_pom::pages::{DashboardPage, LoginPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let admin = config.admin.clone();
//!     let session = Session::start(config).await?;
//!
//!     let login = LoginPage::new(session.base());
//!     login.open().await?;
//!     login.login(&admin.username, &admin.password).await?;
//!
//!     let dashboard = DashboardPage::new(session.base());
//!     assert!(dashboard.is_user_dropdown_visible().await);
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
mod config;
mod error;
mod expect;
pub mod pages;
mod session;

// Re-export configuration
pub use config::{BrowserKind, Config, Credentials};

// Re-export error types
pub use error::{Error, Result};

// Re-export the expect API
pub use expect::{expect, Expectation};

// Re-export the session entry point
pub use session::Session;
