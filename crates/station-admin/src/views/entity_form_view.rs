//! Entity Form View
//!
//! Floating create/edit popup for a category or station. The form itself
//! lives in `AppState::entity_form`; this view only draws it and maps keys.

use crate::actions::{Action, FormAction};
use crate::state::{AppState, FormId};
use crate::views::form_fields::{editing_key, render_form_panel};
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};

#[derive(Debug, Clone)]
pub struct EntityFormView;

impl EntityFormView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EntityFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for EntityFormView {
    fn view_id(&self) -> ViewId {
        ViewId::EntityForm
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let Some(entity_form) = &state.entity_form else {
            return;
        };

        // Dim whatever is underneath
        f.render_widget(
            Block::default().style(Style::default().add_modifier(Modifier::DIM)),
            area,
        );

        let submit = if entity_form.editing.is_some() { "save" } else { "create" };
        render_form_panel(
            &entity_form.title(),
            &entity_form.form,
            None,
            &[("Enter", submit), ("Tab", "next"), ("Esc", "cancel")],
            &state.theme,
            area,
            f,
        );
    }

    fn handle_key(&self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Form(FormAction::CloseEntityForm)),
            _ => editing_key(FormId::Entity, key),
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}
