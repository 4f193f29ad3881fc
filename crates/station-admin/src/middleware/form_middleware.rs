//! Form Middleware
//!
//! Validates a form on submit. Invalid forms get their field errors and stop
//! there; valid ones become the matching request action.

use crate::actions::{AccountAction, Action, FormAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, EntityFormState, EntityKind, FieldKey, FormId};
use crate::validation::validate_form;
use station_admin_client::{Credentials, EntityDraft, Registration};

pub struct FormMiddleware;

impl FormMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn submit(&self, id: FormId, state: &AppState, dispatcher: &Dispatcher) {
        let Some(errors) = validate_form(id, state) else {
            log::debug!("Submit for closed form {:?} ignored", id);
            return;
        };
        let valid = errors.is_empty();
        if !valid {
            log::debug!("{:?} form has {} invalid fields", id, errors.len());
        }
        dispatcher.dispatch(Action::Form(FormAction::ShowErrors(id, errors)));
        if !valid {
            return;
        }

        match id {
            FormId::Login => {
                if state.account.loading {
                    return;
                }
                let form = &state.login_form;
                dispatcher.dispatch(Action::Account(AccountAction::SignIn(Credentials {
                    email: form.value(FieldKey::Email).trim().to_string(),
                    password: form.value(FieldKey::Password).to_string(),
                })));
            }
            FormId::Register => {
                if state.account.loading {
                    return;
                }
                let form = &state.register_form;
                dispatcher.dispatch(Action::Account(AccountAction::Register(Registration {
                    full_name: form.value(FieldKey::FullName).trim().to_string(),
                    email: form.value(FieldKey::Email).trim().to_string(),
                    phone: form.value(FieldKey::Phone).trim().to_string(),
                    password: form.value(FieldKey::Password).to_string(),
                })));
            }
            FormId::Entity => {
                if let Some(entity_form) = &state.entity_form {
                    if let Some(action) = entity_request(entity_form, state) {
                        dispatcher.dispatch(action);
                    }
                }
                dispatcher.dispatch(Action::Form(FormAction::CloseEntityForm));
            }
        }
    }
}

impl Default for FormMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Create, or update with only the fields that differ from the stored record
fn entity_request(entity_form: &EntityFormState, state: &AppState) -> Option<Action> {
    let name = entity_form.form.value(FieldKey::Name).trim().to_string();
    let description = entity_form.form.value(FieldKey::Description).trim().to_string();
    let kind = entity_form.kind;

    let Some(id) = entity_form.editing.clone() else {
        return Some(kind.create(EntityDraft::new(name, description)));
    };

    let patch = match stored_fields(state, kind, &id) {
        Some((stored_name, stored_description)) => EntityDraft {
            name: (stored_name != name).then_some(name),
            description: (stored_description != description).then_some(description),
        },
        None => EntityDraft::new(name, description),
    };

    if patch == EntityDraft::default() {
        log::debug!("No changes to {} {}", kind.label(), id);
        return None;
    }
    Some(kind.update(id, patch))
}

fn stored_fields(state: &AppState, kind: EntityKind, id: &str) -> Option<(String, String)> {
    let fields = |name: &str, description: &str| (name.to_string(), description.to_string());
    match kind {
        EntityKind::Category => state
            .categories
            .get(id)
            .map(|c| fields(&c.name, &c.description)),
        EntityKind::Station => state
            .stations
            .get(id)
            .map(|s| fields(&s.name, &s.description)),
    }
}

impl Middleware for FormMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Form(FormAction::Submit(id)) = action {
            self.submit(*id, state, dispatcher);
            return false;
        }
        true
    }
}
