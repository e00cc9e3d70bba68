use crate::modules::accounts::adapters::outbound::account_store::AccountStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }
}
