use crate::modules::accounts::adapters::outbound::account_store::AccountStore;
use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::errors::AccountError;
use crate::modules::accounts::core::seed::seed_accounts;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<i64, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later records win when the iterator repeats an account number.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.account_number, account))
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    pub fn seeded() -> Self {
        Self::with_accounts(seed_accounts())
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn list_all(&self) -> Vec<Account> {
        self.accounts.read().await.values().cloned().collect()
    }

    async fn get_by_number(&self, account_number: i64) -> Result<Account, AccountError> {
        self.accounts
            .read()
            .await
            .get(&account_number)
            .cloned()
            .ok_or(AccountError::NotFound(account_number))
    }

    async fn create(&self, account: Account) -> Result<(), AccountError> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.account_number) {
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
            Entry::Occupied(existing) if *existing.get() == account => Ok(()),
            Entry::Occupied(_) => Err(AccountError::AlreadyExists(account.account_number)),
        }
    }

    async fn update(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&account.account_number) {
            Some(stored) => {
                *stored = account.clone();
                Ok(account)
            }
            None => Err(AccountError::NotFound(account.account_number)),
        }
    }

    async fn delete(&self, account_number: i64) -> bool {
        self.accounts
            .write()
            .await
            .remove(&account_number)
            .is_some()
    }
}
