//! Reducers
//!
//! Pure functions from (state, action) to state. `app_reducer::reduce` is the
//! root; the others each own one slice or screen.

pub mod account_reducer;
pub mod app_reducer;
pub mod dashboard_reducer;
pub mod entity_reducer;
pub mod form_reducer;
pub mod status_bar_reducer;
