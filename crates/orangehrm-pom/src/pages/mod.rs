// Page objects, one per application screen.

mod activity;
mod add_employee;
mod base;
mod customer;
mod dashboard;
mod login;
mod pim;
mod project;
mod timesheet;

pub use activity::ActivityPage;
pub use add_employee::AddEmployeePage;
pub use base::{BasePage, Selector};
pub use customer::{CustomerError, CustomerPage};
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use pim::PimPage;
pub use project::ProjectPage;
pub use timesheet::{TimesheetPage, TimesheetStatus, Weekday};
