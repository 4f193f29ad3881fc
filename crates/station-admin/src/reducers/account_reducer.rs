//! Account Reducer
//!
//! Session slice: who is signed in, plus the sign-in/registration round trip.

use crate::actions::AccountAction;
use crate::state::AccountState;

pub fn reduce_account(mut state: AccountState, action: &AccountAction) -> AccountState {
    match action {
        AccountAction::Login(user) => {
            log::info!("Signed in as {}", user.display_name());
            state.user = Some(user.clone());
        }
        AccountAction::Logout => {
            if state.user.take().is_some() {
                log::info!("Signed out");
            }
        }

        // Requests are handled by ApiMiddleware
        AccountAction::SignIn(_) | AccountAction::Register(_) => {}

        AccountAction::SignInPending | AccountAction::RegisterPending => {
            state.loading = true;
            state.error = None;
        }
        AccountAction::SignInFulfilled(user) => {
            state.loading = false;
            state.user = Some(user.clone());
        }
        AccountAction::SignInRejected(error) | AccountAction::RegisterRejected(error) => {
            state.loading = false;
            state.error = Some(error.clone());
        }
        AccountAction::RegisterFulfilled(user) => {
            state.loading = false;
            state.registered_email = user.email.clone();
        }
        AccountAction::ClearError => {
            state.error = None;
        }
    }
    state
}
