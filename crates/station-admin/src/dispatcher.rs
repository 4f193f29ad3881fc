//! Dispatcher for middleware action dispatch
//!
//! Middleware and background tasks never touch the store directly. They send
//! actions through a [`Dispatcher`]; the store drains the channel on the main
//! thread, so every dispatched action re-enters the middleware chain and state
//! is only ever written from one place.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Cheap to clone and `Send`, so async tasks can report results with it.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; it runs after the current dispatch finishes, in send order
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
