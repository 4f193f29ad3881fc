//! Register View

use crate::actions::{AccountAction, Action, GlobalAction};
use crate::state::{AppState, FormId};
use crate::views::form_fields::{editing_key, render_form_panel};
use crate::views::{LoginView, View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::Rect,
    text::{Line, Span},
    Frame,
};

#[derive(Debug, Clone)]
pub struct RegisterView;

impl RegisterView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegisterView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RegisterView {
    fn view_id(&self) -> ViewId {
        ViewId::Register
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let notice = if state.account.loading {
            Some(Line::from(Span::styled("Creating account...", theme.info())))
        } else {
            state.account.error.as_deref().map(|e| {
                Line::from(Span::styled(
                    format!("Registration failed: {}", e),
                    theme.error(),
                ))
            })
        };

        render_form_panel(
            " Station Admin - Register ",
            &state.register_form,
            notice,
            &[
                ("Enter", "register"),
                ("Tab", "next"),
                ("C-x", "dismiss error"),
                ("C-l/Esc", "back to login"),
            ],
            theme,
            area,
            f,
        );
    }

    fn handle_key(&self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        let back = matches!(key.code, KeyCode::Esc)
            || (key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL));
        if back {
            return Some(Action::Global(GlobalAction::ReplaceView(Box::new(
                LoginView::new(),
            ))));
        }
        if key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Account(AccountAction::ClearError));
        }
        editing_key(FormId::Register, key)
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}
