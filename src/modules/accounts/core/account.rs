use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Open,
    Overdrawn,
    Closed,
}

/// A bank account record. `account_number` is the identity; every other
/// field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: i64,
    pub routing_number: i64,
    pub customer_name: String,
    pub balance: Decimal,
    #[serde(default)]
    pub account_status: AccountStatus,
}

impl Account {
    pub fn new(
        account_number: i64,
        routing_number: i64,
        customer_name: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            account_number,
            routing_number,
            customer_name: customer_name.into(),
            balance,
            account_status: AccountStatus::default(),
        }
    }

    pub fn location(&self) -> String {
        format!("/accounts/{}", self.account_number)
    }
}
