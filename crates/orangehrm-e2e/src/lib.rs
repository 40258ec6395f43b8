//! orangehrm-e2e: End-to-end UI test suite for OrangeHRM business workflows
//!
//! The tests live under `tests/`; this library carries what they share: the
//! session harness with failure screenshots, the JSON fixtures keyed by
//! test-case ID, and the timesheet workflow model the multi-actor flows
//! assert against.
//!
//! The browser tests are `#[ignore]`d by default; running them needs a
//! WebDriver endpoint (geckodriver by default) and network access to the
//! configured OrangeHRM instance:
//!
//! ```bash
//! geckodriver --port 4444 &
//! cargo test -p orangehrm-e2e -- --ignored --test-threads=1
//! ```

pub mod fixtures;
pub mod harness;
pub mod workflow;
