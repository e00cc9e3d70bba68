// Builder for accounts used across tests. Defaults describe a customer that
// is not part of the seed data.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::modules::accounts::core::account::{Account, AccountStatus};

pub struct AccountBuilder {
    inner: Account,
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountBuilder {
    pub fn new() -> Self {
        Self {
            inner: Account::new(324324, 112244, "Sandy Holmes", dec!(154.55)),
        }
    }

    pub fn account_number(mut self, v: i64) -> Self {
        self.inner.account_number = v;
        self
    }

    pub fn routing_number(mut self, v: i64) -> Self {
        self.inner.routing_number = v;
        self
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = v.into();
        self
    }

    pub fn balance(mut self, v: Decimal) -> Self {
        self.inner.balance = v;
        self
    }

    pub fn account_status(mut self, v: AccountStatus) -> Self {
        self.inner.account_status = v;
        self
    }

    pub fn build(self) -> Account {
        self.inner
    }

    pub fn to_json(self) -> String {
        serde_json::to_string(&self.inner).unwrap()
    }
}
