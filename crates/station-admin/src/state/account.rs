//! Account (session) state

use station_admin_client::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountState {
    /// Signed-in user, `None` when unauthenticated
    pub user: Option<User>,
    /// A sign-in or registration request is in flight
    pub loading: bool,
    pub error: Option<String>,
    /// Email of the last account created in this process, used to prefill login
    pub registered_email: Option<String>,
}

impl AccountState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
