//! Shared HTTP application state.

use warden_auth::AuthCore;
use warden_directory::AccountService;

/// State handed to every handler and to the credential gate.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub auth: AuthCore,
}

impl AppState {
    pub fn new(accounts: AccountService, auth: AuthCore) -> Self {
        Self { accounts, auth }
    }
}
