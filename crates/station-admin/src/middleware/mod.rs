use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod form_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod navigation_middleware;
pub mod session_middleware;

pub use api_middleware::ApiMiddleware;
pub use form_middleware::FormMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use navigation_middleware::NavigationMiddleware;
pub use session_middleware::SessionMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the main thread inside `Store::dispatch`. Anything slow
/// (network, disk) must be handed to a runtime and report back through the
/// dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
