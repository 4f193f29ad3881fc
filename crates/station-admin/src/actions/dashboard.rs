//! Dashboard actions

use crate::state::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Switch section; entering a section reloads its data
    ShowSection(Section),
    NextSection,
    CursorUp,
    CursorDown,
    /// Ask for confirmation before deleting the record with this id
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
}
