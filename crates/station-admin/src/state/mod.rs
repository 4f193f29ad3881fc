//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod account;
mod app;
mod dashboard;
mod entity_slice;
mod forms;
mod status_bar;

pub use account::AccountState;
pub use app::AppState;
pub use dashboard::{DashboardState, Section};
pub use entity_slice::{EntityKind, EntitySeed, EntitySlice};
pub use forms::{EntityFormState, FieldKey, FormId, FormState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
