//! Login View
//!
//! Base screen when nobody is signed in.

use crate::actions::{AccountAction, Action, GlobalAction};
use crate::state::{AppState, FormId};
use crate::views::form_fields::{editing_key, render_form_panel};
use crate::views::{RegisterView, View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::Rect,
    text::{Line, Span},
    Frame,
};

#[derive(Debug, Clone)]
pub struct LoginView;

impl LoginView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for LoginView {
    fn view_id(&self) -> ViewId {
        ViewId::Login
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let notice = if state.account.loading {
            Some(Line::from(Span::styled("Signing in...", theme.info())))
        } else {
            state
                .account
                .error
                .as_deref()
                .map(|e| Line::from(Span::styled(format!("Login failed: {}", e), theme.error())))
        };

        render_form_panel(
            " Station Admin - Login ",
            &state.login_form,
            notice,
            &[
                ("Enter", "login"),
                ("Tab", "next"),
                ("C-r", "register"),
                ("C-x", "dismiss error"),
                ("Esc", "quit"),
            ],
            theme,
            area,
            f,
        );
    }

    fn handle_key(&self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Global(GlobalAction::Close)),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(
                Action::Global(GlobalAction::ReplaceView(Box::new(RegisterView::new()))),
            ),
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Account(AccountAction::ClearError))
            }
            _ => editing_key(FormId::Login, key),
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        LoginView::new().handle_key(KeyEvent::new(code, modifiers), &AppState::default())
    }

    #[test]
    fn test_ctrl_x_dismisses_account_error() {
        assert!(matches!(
            key(KeyCode::Char('x'), KeyModifiers::CONTROL),
            Some(Action::Account(AccountAction::ClearError))
        ));
        // Plain x is typed into the field
        assert!(matches!(
            key(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Form(_))
        ));
    }
}
