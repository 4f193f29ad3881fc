//! KeyboardMiddleware - translates raw key events into actions
//!
//! Ctrl+C always quits. Every other key is offered to the active view, which
//! maps it to an action based on its own state (focused field, cursor, ...).

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        let Some(view) = state.active_view() else {
            return;
        };
        match view.handle_key(key, state) {
            Some(action) => dispatcher.dispatch(action),
            None => log::trace!("{:?} ignored key {:?}", view.view_id(), key.code),
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducer
            return false;
        }
        true
    }
}
