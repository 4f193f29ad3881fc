use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Store - holds application state and manages the Redux loop
///
/// Actions go through the middleware chain, then the root reducer, then every
/// subscriber is notified. Actions queued on the [`Dispatcher`] (by middleware
/// or by async API tasks) are applied in arrival order by [`Store::process_pending`].
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, callback: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false when the subscription was already removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Process an action, then everything it queued
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        self.process_pending();
    }

    /// Apply every queued action without blocking. Returns how many ran.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action);
            processed += 1;
        }
        processed
    }

    /// Block until at least one queued action arrives (or `timeout` passes),
    /// then apply everything queued. Returns how many ran.
    pub fn wait_for_pending(&mut self, timeout: Duration) -> usize {
        match self.action_rx.recv_timeout(timeout) {
            Ok(action) => {
                self.apply(action);
                1 + self.process_pending()
            }
            Err(RecvTimeoutError::Timeout) => 0,
            Err(RecvTimeoutError::Disconnected) => {
                log::error!("Store: action channel disconnected");
                0
            }
        }
    }

    fn apply(&mut self, action: Action) {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        self.state = reduce(self.state.clone(), &action);

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
