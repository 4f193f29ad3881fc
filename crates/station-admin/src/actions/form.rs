//! Form actions
//!
//! Shared by the login, register and entity forms. The target form is named
//! explicitly so reducers never have to guess from the view stack.

use crate::state::{EntityKind, EntitySeed, FieldKey, FormId};

/// Editing keys forwarded to the focused field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    ClearField,
    NextField,
    PrevField,
}

#[derive(Debug, Clone)]
pub enum FormAction {
    Input(FormId, FormInput),
    /// Validate and, when valid, send the form (handled by FormMiddleware)
    Submit(FormId),
    /// Replace field errors with the result of a validation pass
    ShowErrors(FormId, Vec<(FieldKey, String)>),
    /// Open the create/edit popup; `seed` prefills it for editing
    OpenEntityForm {
        kind: EntityKind,
        seed: Option<EntitySeed>,
    },
    CloseEntityForm,
}
