use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::errors::AccountError;
use async_trait::async_trait;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Every stored account, in no particular order.
    async fn list_all(&self) -> Vec<Account>;

    async fn get_by_number(&self, account_number: i64) -> Result<Account, AccountError>;

    /// Inserts a new record. Re-submitting an identical record is absorbed;
    /// a different record under an existing number is rejected.
    async fn create(&self, account: Account) -> Result<(), AccountError>;

    /// Replaces the record with the same account number. Never creates.
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// Returns whether a record was removed.
    async fn delete(&self, account_number: i64) -> bool;
}
