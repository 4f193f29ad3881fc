use crate::actions::{AccountAction, Action, GlobalAction};
use crate::reducers::{
    account_reducer, dashboard_reducer, entity_reducer, form_reducer, status_bar_reducer,
};
use crate::state::{AppState, FieldKey, FormState};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => return reduce_global(state, global),
        Action::Account(account) => {
            state.account = account_reducer::reduce_account(state.account, account);
            state = after_account(state, account);
        }
        Action::Categories(action) => {
            state.categories = entity_reducer::reduce_entity(state.categories, action);
        }
        Action::Stations(action) => {
            state.stations = entity_reducer::reduce_entity(state.stations, action);
        }
        Action::Form(action) => {
            state = form_reducer::reduce_form(state, action);
        }
        Action::Dashboard(action) => {
            state = dashboard_reducer::reduce_dashboard(state, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, action);
        }
    }

    state.dashboard = dashboard_reducer::clamp_cursors(
        state.dashboard,
        state.categories.items.len(),
        state.stations.items.len(),
    );
    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::ReplaceView(new_view) => {
            // Replace entire view stack with new view (for navigation)
            log::debug!("Replacing view stack with: {:?}", new_view.view_id());
            state.view_stack.clear();
            state.view_stack.push(new_view.clone());
            state.entity_form = None;
            state.account.error = None;
        }
        GlobalAction::Close => {
            // Closing the last view quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::Bootstrap | GlobalAction::KeyPressed(_) => {}
    }
    state
}

/// Form side of the session round trip
fn after_account(mut state: AppState, action: &AccountAction) -> AppState {
    match action {
        AccountAction::SignInFulfilled(_) => {
            state.login_form.reset();
        }
        AccountAction::RegisterFulfilled(_) => {
            state.register_form.reset();
            state.login_form = FormState::login();
            if let Some(email) = &state.account.registered_email {
                state.login_form.set_value(FieldKey::Email, email.clone());
                state.login_form.next_field();
            }
        }
        AccountAction::Logout => {
            state.entity_form = None;
            state.dashboard.pending_delete = None;
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{EntityAction, Operation, Outcome, Request};
    use crate::views::{DashboardView, LoginView, ViewId};
    use station_admin_client::{Category, User};

    fn active(state: &AppState) -> Option<ViewId> {
        state.active_view().map(|v| v.view_id())
    }

    #[test]
    fn test_initial_state_is_signed_out_on_login() {
        let state = AppState::default();
        assert!(state.running);
        assert!(state.account.user.is_none());
        assert!(state.categories.items.is_empty());
        assert!(state.stations.items.is_empty());
        assert_eq!(active(&state), Some(ViewId::Login));
    }

    fn with_dashboard_on_top() -> AppState {
        let mut state = AppState::default();
        state.view_stack.push(Box::new(DashboardView::new()));
        state
    }

    #[test]
    fn test_close_last_view_quits() {
        let state = reduce(with_dashboard_on_top(), &Action::Global(GlobalAction::Close));
        assert!(state.running);
        assert_eq!(active(&state), Some(ViewId::Login));

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_replace_view_clears_stack() {
        let state = reduce(
            with_dashboard_on_top(),
            &Action::Global(GlobalAction::ReplaceView(Box::new(LoginView::new()))),
        );
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(active(&state), Some(ViewId::Login));
    }

    #[test]
    fn test_registration_prefills_login_email() {
        let user = User {
            id: "7".to_string(),
            email: Some("new@example.com".to_string()),
            ..User::default()
        };
        let state = reduce(
            AppState::default(),
            &Action::Account(AccountAction::RegisterFulfilled(user)),
        );
        assert_eq!(state.login_form.value(FieldKey::Email), "new@example.com");
        assert_eq!(state.login_form.focused, 1);
        assert!(state.account.user.is_none());
    }

    #[test]
    fn test_cursor_clamped_after_delete() {
        let mut state = AppState::default();
        state.categories.items = vec![
            Category {
                id: "1".to_string(),
                name: "A".to_string(),
                description: "first".to_string(),
            },
            Category {
                id: "2".to_string(),
                name: "B".to_string(),
                description: "second".to_string(),
            },
        ];
        state.dashboard.category_cursor = 1;

        let request = Request::new(1, Operation::Delete("2".to_string()));
        let state = reduce(state, &Action::Categories(EntityAction::Pending(request.clone())));
        let state = reduce(
            state,
            &Action::Categories(EntityAction::Fulfilled(
                request,
                Outcome::Deleted("2".to_string()),
            )),
        );
        assert_eq!(state.dashboard.category_cursor, 0);
    }
}
