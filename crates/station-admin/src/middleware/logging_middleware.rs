use crate::actions::{Action, FormAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Log line for an action, `None` for input that may carry typed passwords
fn describe(action: &Action) -> Option<String> {
    match action {
        Action::Global(GlobalAction::KeyPressed(_)) | Action::Form(FormAction::Input(..)) => None,
        _ => Some(format!("Action: {:?}", action)),
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Some(line) = describe(action) {
            log::debug!("{}", line);
        }

        true // Always pass action through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{AccountAction, FormInput};
    use crate::state::FormId;
    use station_admin_client::{Credentials, Registration};

    #[test]
    fn test_typed_input_is_not_logged() {
        let key = Action::Form(FormAction::Input(FormId::Login, FormInput::Char('x')));
        assert_eq!(describe(&key), None);
        assert!(describe(&Action::Form(FormAction::Submit(FormId::Login))).is_some());
    }

    #[test]
    fn test_credentials_are_redacted() {
        let sign_in = Action::Account(AccountAction::SignIn(Credentials {
            email: "admin@example.com".to_string(),
            password: "Hunter2!secret".to_string(),
        }));
        let register = Action::Account(AccountAction::Register(Registration {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0912345678".to_string(),
            password: "Hunter2!secret".to_string(),
        }));

        for action in [sign_in, register] {
            let line = describe(&action).unwrap();
            assert!(!line.contains("Hunter2"), "{line}");
        }
    }
}
