//! Form state for the login, register and entity forms

use super::{EntityKind, EntitySeed};

/// Which form an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    Login,
    Register,
    Entity,
}

/// Field identity; validation rules are keyed on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Name,
    Description,
}

impl FieldKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }

    /// Rendered as bullets
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    fn new(key: FieldKey) -> Self {
        Self {
            key,
            value: String::new(),
            error: None,
        }
    }
}

/// Ordered set of text fields with one focused field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    pub fn new(keys: &[FieldKey]) -> Self {
        Self {
            fields: keys.iter().copied().map(FormField::new).collect(),
            focused: 0,
        }
    }

    pub fn login() -> Self {
        Self::new(&[FieldKey::Email, FieldKey::Password])
    }

    pub fn register() -> Self {
        Self::new(&[
            FieldKey::FullName,
            FieldKey::Email,
            FieldKey::Phone,
            FieldKey::Password,
            FieldKey::ConfirmPassword,
        ])
    }

    pub fn entity() -> Self {
        Self::new(&[FieldKey::Name, FieldKey::Description])
    }

    /// Value of a field, empty when the form has no such field
    pub fn value(&self, key: FieldKey) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: FieldKey, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.error.as_deref())
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused)
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = if self.focused == 0 {
                self.fields.len() - 1
            } else {
                self.focused - 1
            };
        }
    }

    /// Replace all field errors; fields not listed become valid
    pub fn set_errors(&mut self, errors: &[(FieldKey, String)]) {
        for field in &mut self.fields {
            field.error = errors
                .iter()
                .find(|(key, _)| *key == field.key)
                .map(|(_, message)| message.clone());
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focused = 0;
    }
}

/// Create/edit popup for a category or station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFormState {
    pub kind: EntityKind,
    /// Id of the record being edited, `None` when creating
    pub editing: Option<String>,
    pub form: FormState,
}

impl EntityFormState {
    pub fn new(kind: EntityKind, seed: Option<EntitySeed>) -> Self {
        let mut form = FormState::entity();
        let editing = seed.map(|seed| {
            form.set_value(FieldKey::Name, seed.name);
            form.set_value(FieldKey::Description, seed.description);
            seed.id
        });
        Self {
            kind,
            editing,
            form,
        }
    }

    pub fn title(&self) -> String {
        let verb = if self.editing.is_some() { "Edit" } else { "Create new" };
        format!(" {} {} ", verb, self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_focus_wraps() {
        let mut form = FormState::login();
        form.prev_field();
        assert_eq!(form.focused, 1);
        form.next_field();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_set_errors_replaces_previous() {
        let mut form = FormState::login();
        form.set_errors(&[(FieldKey::Email, "bad".to_string())]);
        assert_eq!(form.error(FieldKey::Email), Some("bad"));

        form.set_errors(&[(FieldKey::Password, "short".to_string())]);
        assert_eq!(form.error(FieldKey::Email), None);
        assert_eq!(form.error(FieldKey::Password), Some("short"));
    }

    #[test]
    fn test_entity_form_prefills_from_seed() {
        let state = EntityFormState::new(
            EntityKind::Category,
            Some(EntitySeed {
                id: "1".to_string(),
                name: "Drinks".to_string(),
                description: "Beverage category".to_string(),
            }),
        );
        assert_eq!(state.editing.as_deref(), Some("1"));
        assert_eq!(state.form.value(FieldKey::Name), "Drinks");
        assert_eq!(state.title(), " Edit category ");
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let mut form = FormState::entity();
        form.set_value(FieldKey::Name, "x");
        form.set_errors(&[(FieldKey::Name, "too short".to_string())]);
        form.next_field();
        form.reset();
        assert_eq!(form, FormState::entity());
    }
}
