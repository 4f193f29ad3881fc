//! API Middleware
//!
//! Runs every remote call of the application:
//! - entity requests (fetch all, create, update, delete) for both collections
//! - sign-in and registration
//!
//! Each request is tagged with a sequence number and reported as `Pending`
//! before its task is spawned, so the slice sees it in dispatch order. The task
//! reports `Fulfilled` or `Rejected` through the dispatcher when it settles.
//! Settlements also pass through here on their way to the reducer and produce
//! the status bar notifications.

use crate::actions::{
    AccountAction, Action, EntityAction, Operation, Outcome, Request, StatusBarAction,
    StoreEntity,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use station_admin_client::{Category, RemoteDataSource, Station};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all remote data source operations
pub struct ApiMiddleware<S: RemoteDataSource> {
    /// Tokio runtime for async operations
    runtime: Runtime,
    api: Arc<S>,
    next_seq: u64,
}

impl<S: RemoteDataSource> ApiMiddleware<S> {
    pub fn new(api: S) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            runtime,
            api: Arc::new(api),
            next_seq: 0,
        })
    }

    fn next_request(&mut self, op: Operation) -> Request {
        self.next_seq += 1;
        Request::new(self.next_seq, op)
    }

    fn handle_entity<E: StoreEntity>(
        &mut self,
        action: &EntityAction<E>,
        dispatcher: &Dispatcher,
    ) -> bool {
        let op = match action {
            EntityAction::FetchAll => Operation::FetchAll,
            EntityAction::Create(_) => Operation::Create,
            EntityAction::Update { id, .. } => Operation::Update(id.clone()),
            EntityAction::Delete(id) => Operation::Delete(id.clone()),
            EntityAction::Fulfilled(request, outcome) => {
                notify_fulfilled::<E>(&request.op, outcome, dispatcher);
                return true;
            }
            EntityAction::Rejected(request, error) => {
                notify_rejected::<E>(&request.op, error, dispatcher);
                return true;
            }
            _ => return true,
        };

        let request = self.next_request(op);
        log::debug!("ApiMiddleware: {} request #{} {:?}", E::LABEL, request.seq, request.op);
        dispatcher.dispatch(E::wrap(EntityAction::Pending(request.clone())));

        let api = Arc::clone(&self.api);
        let dispatcher = dispatcher.clone();
        let action = action.clone();
        self.runtime.spawn(async move {
            let result = match &action {
                EntityAction::FetchAll => api.list::<E>().await.map(Outcome::Fetched),
                EntityAction::Create(draft) => api.create::<E>(draft).await.map(Outcome::Created),
                EntityAction::Update { id, patch } => {
                    api.update::<E>(id, patch).await.map(Outcome::Updated)
                }
                EntityAction::Delete(id) => api
                    .delete::<E>(id)
                    .await
                    .map(|()| Outcome::Deleted(id.clone())),
                _ => return,
            };

            let settled = match result {
                Ok(outcome) => EntityAction::Fulfilled(request, outcome),
                Err(e) => {
                    log::warn!("ApiMiddleware: {} request #{} failed: {}", E::LABEL, request.seq, e);
                    EntityAction::Rejected(request, e.to_string())
                }
            };
            dispatcher.dispatch(E::wrap(settled));
        });

        // Requests never reach the reducer
        false
    }

    fn handle_account(&mut self, action: &AccountAction, dispatcher: &Dispatcher) -> bool {
        match action {
            AccountAction::SignIn(credentials) => {
                dispatcher.dispatch(Action::Account(AccountAction::SignInPending));
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let credentials = credentials.clone();
                self.runtime.spawn(async move {
                    let settled = match api.login(&credentials).await {
                        Ok(user) => AccountAction::SignInFulfilled(user),
                        Err(e) => {
                            log::warn!("ApiMiddleware: sign-in failed: {}", e);
                            AccountAction::SignInRejected(e.to_string())
                        }
                    };
                    dispatcher.dispatch(Action::Account(settled));
                });
                false
            }
            AccountAction::Register(registration) => {
                dispatcher.dispatch(Action::Account(AccountAction::RegisterPending));
                let api = Arc::clone(&self.api);
                let dispatcher = dispatcher.clone();
                let registration = registration.clone();
                self.runtime.spawn(async move {
                    let settled = match api.register(&registration).await {
                        Ok(user) => AccountAction::RegisterFulfilled(user),
                        Err(e) => {
                            log::warn!("ApiMiddleware: registration failed: {}", e);
                            AccountAction::RegisterRejected(e.to_string())
                        }
                    };
                    dispatcher.dispatch(Action::Account(settled));
                });
                false
            }
            AccountAction::SignInFulfilled(user) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Login successful! Welcome, {}", user.display_name()),
                    "account",
                )));
                true
            }
            AccountAction::SignInRejected(error) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Login failed: {}", error),
                    "account",
                )));
                true
            }
            AccountAction::RegisterFulfilled(_) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    "Registration successful! Please login.",
                    "account",
                )));
                true
            }
            AccountAction::RegisterRejected(error) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Registration failed: {}", error),
                    "account",
                )));
                true
            }
            _ => true,
        }
    }
}

fn notify_fulfilled<E: StoreEntity>(op: &Operation, outcome: &Outcome<E>, dispatcher: &Dispatcher) {
    let verb = match outcome {
        Outcome::Fetched(_) => return,
        Outcome::Created(_) => "created new",
        Outcome::Updated(_) => "updated",
        Outcome::Deleted(_) => "deleted",
    };
    log::debug!("ApiMiddleware: {:?} on {} succeeded", op, E::LABEL);
    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
        format!("Successfully {} {}!", verb, E::LABEL),
        E::RESOURCE,
    )));
}

fn notify_rejected<E: StoreEntity>(op: &Operation, error: &str, dispatcher: &Dispatcher) {
    let verb = match op {
        Operation::FetchAll => "load",
        Operation::Create => "create",
        Operation::Update(_) => "update",
        Operation::Delete(_) => "delete",
    };
    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
        format!("Failed to {} {}: {}", verb, E::LABEL, error),
        E::RESOURCE,
    )));
}

impl<S: RemoteDataSource> Middleware for ApiMiddleware<S> {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Categories(action) => self.handle_entity::<Category>(action, dispatcher),
            Action::Stations(action) => self.handle_entity::<Station>(action, dispatcher),
            Action::Account(action) => self.handle_account(action, dispatcher),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;
    use crate::store::Store;
    use async_trait::async_trait;
    use serde_json::Value;
    use station_admin_client::{
        ApiError, ApiResult, Credentials, Entity, EntityDraft, Registration, User,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// In-memory remote keyed by resource name
    ///
    /// Drafts whose description contains "slowest" take 400ms, "slow" 200ms;
    /// a draft named "boom" fails with a server error.
    #[derive(Default)]
    struct FakeApi {
        records: Mutex<HashMap<&'static str, Vec<Value>>>,
        next_id: Mutex<u64>,
    }

    impl FakeApi {
        fn with_categories(categories: &[Category]) -> Self {
            let api = Self::default();
            let values = categories
                .iter()
                .map(|c| serde_json::to_value(c).unwrap())
                .collect();
            api.records.lock().unwrap().insert(Category::RESOURCE, values);
            api
        }

        async fn delay_for(draft: &EntityDraft) {
            let millis = match draft.description.as_deref() {
                Some(d) if d.contains("slowest") => 400,
                Some(d) if d.contains("slow") => 200,
                _ => return,
            };
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "\"Internal Server Error\"".to_string(),
        }
    }

    #[async_trait]
    impl RemoteDataSource for FakeApi {
        async fn list<E: Entity>(&self) -> ApiResult<Vec<E>> {
            let records = self.records.lock().unwrap();
            records
                .get(E::RESOURCE)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|v| serde_json::from_value(v).map_err(|e| ApiError::Decode(e.to_string())))
                .collect()
        }

        async fn create<E: Entity>(&self, draft: &EntityDraft) -> ApiResult<E> {
            Self::delay_for(draft).await;
            if draft.name.as_deref() == Some("boom") {
                return Err(server_error());
            }
            let id = {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                next.to_string()
            };
            let mut record = serde_json::to_value(draft).unwrap();
            record["id"] = Value::String(id);
            self.records
                .lock()
                .unwrap()
                .entry(E::RESOURCE)
                .or_default()
                .push(record.clone());
            serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
        }

        async fn update<E: Entity>(&self, id: &str, patch: &EntityDraft) -> ApiResult<E> {
            Self::delay_for(patch).await;
            let mut records = self.records.lock().unwrap();
            let record = records
                .entry(E::RESOURCE)
                .or_default()
                .iter_mut()
                .find(|r| r["id"] == id)
                .ok_or_else(|| ApiError::Status {
                    status: 404,
                    body: "\"Not found\"".to_string(),
                })?;
            if let Some(name) = &patch.name {
                record["name"] = Value::String(name.clone());
            }
            if let Some(description) = &patch.description {
                record["description"] = Value::String(description.clone());
            }
            serde_json::from_value(record.clone()).map_err(|e| ApiError::Decode(e.to_string()))
        }

        async fn delete<E: Entity>(&self, id: &str) -> ApiResult<()> {
            let mut records = self.records.lock().unwrap();
            records.entry(E::RESOURCE).or_default().retain(|r| r["id"] != id);
            Ok(())
        }

        async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
            if credentials.password != "secret1" {
                return Err(ApiError::Status {
                    status: 401,
                    body: "\"Invalid credentials\"".to_string(),
                });
            }
            Ok(User {
                id: "u1".to_string(),
                full_name: Some("Admin".to_string()),
                email: Some(credentials.email.clone()),
                ..User::default()
            })
        }

        async fn register(&self, registration: &Registration) -> ApiResult<User> {
            Ok(User {
                id: "u2".to_string(),
                full_name: Some(registration.full_name.clone()),
                email: Some(registration.email.clone()),
                ..User::default()
            })
        }
    }

    fn store(api: FakeApi) -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(ApiMiddleware::new(api).unwrap()));
        store
    }

    /// Pump the store until nothing is in flight
    fn settle(store: &mut Store) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let state = store.state();
            let busy = state.categories.in_flight() > 0
                || state.stations.in_flight() > 0
                || state.account.loading;
            if !busy {
                // Pick up notifications queued by the last settlement
                store.process_pending();
                return;
            }
            assert!(Instant::now() < deadline, "requests did not settle");
            store.wait_for_pending(Duration::from_millis(50));
        }
    }

    fn drinks() -> Category {
        Category {
            id: "1".to_string(),
            name: "Drinks".to_string(),
            description: "Beverage category".to_string(),
        }
    }

    fn latest_status(store: &Store) -> Option<(StatusKind, String)> {
        store
            .state()
            .status_bar
            .latest()
            .map(|m| (m.kind, m.message.clone()))
    }

    #[test]
    fn test_pending_is_applied_before_dispatch_returns() {
        let mut store = store(FakeApi::with_categories(&[drinks()]));
        store.dispatch(Category::wrap(EntityAction::FetchAll));
        assert!(store.state().categories.loading);

        settle(&mut store);
        assert!(!store.state().categories.loading);
        assert_eq!(store.state().categories.items, vec![drinks()]);
    }

    #[test]
    fn test_category_lifecycle() {
        let mut store = store(FakeApi::default());

        store.dispatch(Category::wrap(EntityAction::Create(EntityDraft::new(
            "Drinks",
            "Beverage category",
        ))));
        settle(&mut store);
        assert_eq!(store.state().categories.items, vec![drinks()]);
        assert_eq!(
            latest_status(&store),
            Some((StatusKind::Success, "Successfully created new category!".to_string()))
        );

        store.dispatch(Category::wrap(EntityAction::Update {
            id: "1".to_string(),
            patch: EntityDraft::description("All beverages"),
        }));
        settle(&mut store);
        assert_eq!(store.state().categories.items.len(), 1);
        assert_eq!(store.state().categories.items[0].description, "All beverages");

        store.dispatch(Category::wrap(EntityAction::Delete("1".to_string())));
        settle(&mut store);
        assert!(store.state().categories.items.is_empty());
        assert_eq!(store.state().categories.error, None);
    }

    #[test]
    fn test_failed_create_keeps_items_and_reports_error() {
        let mut store = store(FakeApi::with_categories(&[drinks()]));
        store.dispatch(Category::wrap(EntityAction::FetchAll));
        settle(&mut store);

        store.dispatch(Category::wrap(EntityAction::Create(EntityDraft::new(
            "boom",
            "Always fails on the server",
        ))));
        settle(&mut store);

        let categories = &store.state().categories;
        assert_eq!(categories.items, vec![drinks()]);
        assert_eq!(categories.error.as_deref(), Some("Internal Server Error"));
        assert_eq!(
            latest_status(&store),
            Some((
                StatusKind::Error,
                "Failed to create category: Internal Server Error".to_string()
            ))
        );
    }

    #[test]
    fn test_late_response_of_older_update_is_discarded() {
        let mut store = store(FakeApi::with_categories(&[drinks()]));
        store.dispatch(Category::wrap(EntityAction::FetchAll));
        settle(&mut store);

        store.dispatch(Category::wrap(EntityAction::Update {
            id: "1".to_string(),
            patch: EntityDraft::description("slowest older value"),
        }));
        store.dispatch(Category::wrap(EntityAction::Update {
            id: "1".to_string(),
            patch: EntityDraft::description("slow newer value"),
        }));
        assert_eq!(store.state().categories.in_flight(), 2);
        settle(&mut store);

        assert_eq!(store.state().categories.items[0].description, "slow newer value");
        assert!(!store.state().categories.loading);
    }

    #[test]
    fn test_slices_are_independent() {
        let mut store = store(FakeApi::with_categories(&[drinks()]));
        store.dispatch(Station::wrap(EntityAction::Create(EntityDraft::new(
            "boom",
            "Always fails on the server",
        ))));
        store.dispatch(Category::wrap(EntityAction::FetchAll));
        settle(&mut store);

        assert!(store.state().stations.error.is_some());
        assert_eq!(store.state().categories.error, None);
        assert_eq!(store.state().categories.items, vec![drinks()]);
    }

    #[test]
    fn test_sign_in() {
        let mut store = store(FakeApi::default());
        store.dispatch(Action::Account(AccountAction::SignIn(Credentials {
            email: "admin@example.com".to_string(),
            password: "wrong".to_string(),
        })));
        settle(&mut store);
        assert!(!store.state().account.is_signed_in());
        assert_eq!(
            store.state().account.error.as_deref(),
            Some("Invalid credentials")
        );

        store.dispatch(Action::Account(AccountAction::SignIn(Credentials {
            email: "admin@example.com".to_string(),
            password: "secret1".to_string(),
        })));
        settle(&mut store);
        assert_eq!(
            store.state().account.user.as_ref().map(|u| u.id.as_str()),
            Some("u1")
        );
        assert_eq!(
            latest_status(&store),
            Some((
                StatusKind::Success,
                "Login successful! Welcome, Admin".to_string()
            ))
        );
    }
}
