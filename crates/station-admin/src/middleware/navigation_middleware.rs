//! Navigation Middleware
//!
//! Screen flow around the session, and data loading when a dashboard section
//! is entered:
//! - sign-in (or a restored session) opens the dashboard on Home
//! - registration returns to the login screen
//! - logout returns to the login screen
//! - entering a section fetches its collection (Home fetches both)

use crate::actions::{AccountAction, Action, DashboardAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, EntityKind, Section};
use crate::views::{DashboardView, LoginView};

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn load_section(section: Section, dispatcher: &Dispatcher) {
        match section.entity_kind() {
            Some(kind) => dispatcher.dispatch(kind.fetch_all()),
            None => {
                dispatcher.dispatch(EntityKind::Category.fetch_all());
                dispatcher.dispatch(EntityKind::Station.fetch_all());
            }
        }
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Account(AccountAction::Login(_) | AccountAction::SignInFulfilled(_)) => {
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                    DashboardView::new(),
                ))));
                dispatcher.dispatch(Action::Dashboard(DashboardAction::ShowSection(Section::Home)));
            }
            Action::Account(AccountAction::RegisterFulfilled(_) | AccountAction::Logout) => {
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                    LoginView::new(),
                ))));
            }
            Action::Dashboard(DashboardAction::ShowSection(section)) => {
                Self::load_section(*section, dispatcher);
            }
            Action::Dashboard(DashboardAction::NextSection) => {
                Self::load_section(state.dashboard.section.next(), dispatcher);
            }
            Action::Dashboard(DashboardAction::ConfirmDelete) => {
                let target = state.dashboard.section.entity_kind();
                match (target, state.dashboard.pending_delete.clone()) {
                    (Some(kind), Some(id)) => {
                        log::info!("Deleting {} {}", kind.label(), id);
                        dispatcher.dispatch(kind.delete(id));
                    }
                    _ => log::debug!("ConfirmDelete without a pending delete"),
                }
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::EntityAction;
    use std::sync::mpsc;

    fn run(action: Action, state: &AppState) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let mut middleware = NavigationMiddleware::new();
        assert!(middleware.handle(&action, state, &Dispatcher::new(tx)));
        rx.try_iter().collect()
    }

    #[test]
    fn test_home_loads_both_collections() {
        let actions = run(
            Action::Dashboard(DashboardAction::ShowSection(Section::Home)),
            &AppState::default(),
        );
        assert!(matches!(
            actions.as_slice(),
            [
                Action::Categories(EntityAction::FetchAll),
                Action::Stations(EntityAction::FetchAll)
            ]
        ));
    }

    #[test]
    fn test_confirm_delete_targets_current_section() {
        let mut state = AppState::default();
        state.dashboard.section = Section::Stations;
        state.dashboard.pending_delete = Some("4".to_string());

        let actions = run(Action::Dashboard(DashboardAction::ConfirmDelete), &state);
        assert!(matches!(
            actions.as_slice(),
            [Action::Stations(EntityAction::Delete(id))] if id == "4"
        ));
    }

    #[test]
    fn test_logout_returns_to_login() {
        let actions = run(Action::Account(AccountAction::Logout), &AppState::default());
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::ReplaceView(view))] if view.view_id() == crate::views::ViewId::Login
        ));
    }
}
