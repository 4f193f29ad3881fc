//! Actions module
//!
//! Every state transition in the application is an [`Action`]. Actions are
//! grouped by the slice or screen they target.

pub mod account;
pub mod dashboard;
pub mod entity;
pub mod form;
pub mod global;
pub mod status_bar;

pub use account::AccountAction;
pub use dashboard::DashboardAction;
pub use entity::{EntityAction, Operation, Outcome, Request, StoreEntity};
pub use form::{FormAction, FormInput};
pub use global::GlobalAction;
pub use status_bar::StatusBarAction;

use station_admin_client::{Category, Station};

/// Root action enum - tagged by slice/screen
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (bootstrap, quit, view management, raw keys)
    Global(GlobalAction),
    /// Session slice
    Account(AccountAction),
    /// Categories slice
    Categories(EntityAction<Category>),
    /// Stations slice
    Stations(EntityAction<Station>),
    /// Login, register and entity forms
    Form(FormAction),
    /// Dashboard navigation
    Dashboard(DashboardAction),
    /// Status bar notifications
    StatusBar(StatusBarAction),
}
