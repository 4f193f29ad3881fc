//! Session Middleware
//!
//! Keeps the signed-in user in sync with disk:
//! - restores it on bootstrap (dispatches `Account::Login`)
//! - saves it when a user logs in
//! - deletes it on logout

use crate::actions::{AccountAction, Action, GlobalAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use station_admin_client::User;
use station_admin_config::SessionStore;

/// Middleware for session persistence
pub struct SessionMiddleware {
    store: SessionStore,
    /// What is currently on disk, to skip redundant writes
    persisted: Option<User>,
    loaded: bool,
}

impl SessionMiddleware {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            persisted: None,
            loaded: false,
        }
    }

    fn restore(&mut self, dispatcher: &Dispatcher) {
        log::info!("SessionMiddleware: Loading session");
        match self.store.load() {
            Ok(Some(user)) => {
                self.persisted = Some(user.clone());
                dispatcher.dispatch(Action::Account(AccountAction::Login(user)));
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("SessionMiddleware: ignoring unreadable session: {:#}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    "Saved session could not be read, please log in again",
                    "session",
                )));
            }
        }
    }

    fn persist(&mut self, user: &User, dispatcher: &Dispatcher) {
        if self.persisted.as_ref() == Some(user) {
            return;
        }
        match self.store.save(user) {
            Ok(()) => self.persisted = Some(user.clone()),
            Err(e) => {
                log::error!("Failed to save session: {:#}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    "Failed to save session",
                    "session",
                )));
            }
        }
    }

    fn forget(&mut self) {
        if let Err(e) = self.store.clear() {
            log::error!("Failed to remove session: {:#}", e);
        }
        self.persisted = None;
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Bootstrap) => {
                if !self.loaded {
                    self.restore(dispatcher);
                    self.loaded = true;
                }
            }
            Action::Account(AccountAction::Login(user) | AccountAction::SignInFulfilled(user)) => {
                self.persist(user, dispatcher);
            }
            Action::Account(AccountAction::Logout) => {
                self.forget();
            }
            _ => {}
        }
        true // Pass through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::TempDir;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: Some("admin@example.com".to_string()),
            ..User::default()
        }
    }

    fn store_at(dir: &TempDir) -> (Store, SessionStore) {
        let sessions = SessionStore::new(dir.path().join("session.json"));
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(SessionMiddleware::new(sessions.clone())));
        (store, sessions)
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let dir = TempDir::new().unwrap();
        let (mut store, sessions) = store_at(&dir);

        store.dispatch(Action::Account(AccountAction::Login(user())));
        assert_eq!(sessions.load().unwrap(), Some(user()));

        store.dispatch(Action::Account(AccountAction::Logout));
        assert_eq!(sessions.load().unwrap(), None);
        assert!(!sessions.path().exists());
    }

    #[test]
    fn test_bootstrap_restores_user() {
        let dir = TempDir::new().unwrap();
        let (mut store, sessions) = store_at(&dir);
        sessions.save(&user()).unwrap();

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        assert_eq!(store.state().account.user, Some(user()));
    }

    #[test]
    fn test_bootstrap_without_session_stays_signed_out() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = store_at(&dir);

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        assert!(store.state().account.user.is_none());
    }

    #[test]
    fn test_corrupt_session_is_ignored() {
        let dir = TempDir::new().unwrap();
        let (mut store, sessions) = store_at(&dir);
        std::fs::write(sessions.path(), "not json").unwrap();

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        assert!(store.state().account.user.is_none());
        assert!(store.state().status_bar.latest().is_some());
    }
}
