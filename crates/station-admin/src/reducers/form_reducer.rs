//! Form Reducer
//!
//! Field editing for the login, register and entity forms, plus opening and
//! closing the entity popup.

use crate::actions::{EntityAction, FormAction, FormInput};
use crate::reducers::entity_reducer::reduce_entity;
use crate::state::{AppState, EntityFormState, EntityKind, FormState};
use crate::views::{EntityFormView, ViewId};

pub fn reduce_form(mut state: AppState, action: &FormAction) -> AppState {
    match action {
        FormAction::Input(id, input) => {
            if let Some(form) = state.form_mut(*id) {
                apply_input(form, input);
            }
        }

        // Validation happens in FormMiddleware
        FormAction::Submit(_) => {}

        FormAction::ShowErrors(id, errors) => {
            if let Some(form) = state.form_mut(*id) {
                form.set_errors(errors);
            }
        }

        FormAction::OpenEntityForm { kind, seed } => {
            let selected = seed.as_ref().map(|s| s.id.clone());
            log::debug!("Opening {} form (editing: {:?})", kind.label(), selected);
            state.entity_form = Some(EntityFormState::new(*kind, seed.clone()));
            state = set_selected(state, *kind, selected);

            let already_open = state
                .active_view()
                .map(|v| v.view_id() == ViewId::EntityForm)
                .unwrap_or(false);
            if !already_open {
                state.view_stack.push(Box::new(EntityFormView::new()));
            }
        }

        FormAction::CloseEntityForm => {
            if let Some(form) = state.entity_form.take() {
                state = set_selected(state, form.kind, None);
            }
            let on_top = state
                .active_view()
                .map(|v| v.view_id() == ViewId::EntityForm)
                .unwrap_or(false);
            if on_top {
                state.view_stack.pop();
            }
        }
    }
    state
}

fn apply_input(form: &mut FormState, input: &FormInput) {
    match input {
        FormInput::NextField => form.next_field(),
        FormInput::PrevField => form.prev_field(),
        FormInput::Char(c) => {
            if let Some(field) = form.focused_field_mut() {
                field.value.push(*c);
                field.error = None;
            }
        }
        FormInput::Backspace => {
            if let Some(field) = form.focused_field_mut() {
                field.value.pop();
                field.error = None;
            }
        }
        FormInput::ClearField => {
            if let Some(field) = form.focused_field_mut() {
                field.value.clear();
                field.error = None;
            }
        }
    }
}

fn set_selected(mut state: AppState, kind: EntityKind, id: Option<String>) -> AppState {
    match kind {
        EntityKind::Category => {
            let action = match id {
                Some(id) => EntityAction::Select(id),
                None => EntityAction::ClearSelected,
            };
            state.categories = reduce_entity(state.categories, &action);
        }
        EntityKind::Station => {
            let action = match id {
                Some(id) => EntityAction::Select(id),
                None => EntityAction::ClearSelected,
            };
            state.stations = reduce_entity(state.stations, &action);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntitySeed, FieldKey, FormId};

    fn type_text(mut state: AppState, id: FormId, text: &str) -> AppState {
        for c in text.chars() {
            state = reduce_form(state, &FormAction::Input(id, FormInput::Char(c)));
        }
        state
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let state = type_text(AppState::default(), FormId::Login, "a@b.c");
        let state = reduce_form(state, &FormAction::Input(FormId::Login, FormInput::Backspace));
        assert_eq!(state.login_form.value(FieldKey::Email), "a@b.");

        let state = reduce_form(state, &FormAction::Input(FormId::Login, FormInput::NextField));
        let state = type_text(state, FormId::Login, "pw");
        assert_eq!(state.login_form.value(FieldKey::Password), "pw");
    }

    #[test]
    fn test_typing_clears_field_error() {
        let state = reduce_form(
            AppState::default(),
            &FormAction::ShowErrors(
                FormId::Login,
                vec![(FieldKey::Email, "Please input your email!".to_string())],
            ),
        );
        assert!(state.login_form.has_errors());

        let state = type_text(state, FormId::Login, "x");
        assert!(!state.login_form.has_errors());
    }

    #[test]
    fn test_open_and_close_entity_form() {
        let seed = EntitySeed {
            id: "3".to_string(),
            name: "Drinks".to_string(),
            description: "Beverage category".to_string(),
        };
        let state = reduce_form(
            AppState::default(),
            &FormAction::OpenEntityForm {
                kind: EntityKind::Category,
                seed: Some(seed),
            },
        );
        assert_eq!(state.categories.selected.as_deref(), Some("3"));
        assert_eq!(state.view_stack.len(), 2);
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::EntityForm)
        );

        let state = reduce_form(state, &FormAction::CloseEntityForm);
        assert!(state.entity_form.is_none());
        assert_eq!(state.categories.selected, None);
        assert_eq!(state.view_stack.len(), 1);
    }

    #[test]
    fn test_input_to_closed_entity_form_is_ignored() {
        let state = type_text(AppState::default(), FormId::Entity, "abc");
        assert!(state.entity_form.is_none());
    }
}
