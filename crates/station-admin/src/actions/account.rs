//! Account (session) actions
//!
//! `Login`/`Logout` are plain setters. `SignIn` and `Register` are requests
//! executed by the API middleware, which reports back through the
//! pending/fulfilled/rejected variants.

use station_admin_client::{Credentials, Registration, User};

#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Replace the session user unconditionally
    Login(User),
    /// Reset the session to "no user"
    Logout,

    /// Request: authenticate against `/auth/login`
    SignIn(Credentials),
    SignInPending,
    SignInFulfilled(User),
    SignInRejected(String),

    /// Request: create an account via `/auth/register`
    Register(Registration),
    RegisterPending,
    RegisterFulfilled(User),
    RegisterRejected(String),

    /// Dismiss the last account error
    ClearError,
}
