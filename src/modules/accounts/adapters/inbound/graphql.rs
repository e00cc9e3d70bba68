use std::str::FromStr;

use async_graphql::{Enum, InputObject, SimpleObject};
use axum::http::StatusCode;
use rust_decimal::Decimal;

use crate::modules::accounts::core::account::{Account, AccountStatus};
use crate::shared::http::api_error::ApiError;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "AccountStatus")]
pub enum GqlAccountStatus {
    Open,
    Overdrawn,
    Closed,
}

impl From<AccountStatus> for GqlAccountStatus {
    fn from(status: AccountStatus) -> Self {
        match status {
            AccountStatus::Open => Self::Open,
            AccountStatus::Overdrawn => Self::Overdrawn,
            AccountStatus::Closed => Self::Closed,
        }
    }
}

impl From<GqlAccountStatus> for AccountStatus {
    fn from(status: GqlAccountStatus) -> Self {
        match status {
            GqlAccountStatus::Open => Self::Open,
            GqlAccountStatus::Overdrawn => Self::Overdrawn,
            GqlAccountStatus::Closed => Self::Closed,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Account")]
pub struct GqlAccount {
    pub account_number: i64,
    pub routing_number: i64,
    pub customer_name: String,
    /// Exact decimal amount rendered as a string.
    pub balance: String,
    pub account_status: GqlAccountStatus,
}

impl From<Account> for GqlAccount {
    fn from(account: Account) -> Self {
        Self {
            account_number: account.account_number,
            routing_number: account.routing_number,
            customer_name: account.customer_name,
            balance: account.balance.to_string(),
            account_status: account.account_status.into(),
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct AccountInput {
    pub account_number: i64,
    pub routing_number: i64,
    pub customer_name: String,
    pub balance: String,
    pub account_status: Option<GqlAccountStatus>,
}

impl TryFrom<AccountInput> for Account {
    type Error = ApiError;

    fn try_from(input: AccountInput) -> Result<Self, Self::Error> {
        let balance = Decimal::from_str(&input.balance).map_err(|e| {
            ApiError::request(
                StatusCode::BAD_REQUEST,
                format!("invalid balance '{}': {e}", input.balance),
            )
        })?;
        Ok(Self {
            account_number: input.account_number,
            routing_number: input.routing_number,
            customer_name: input.customer_name,
            balance,
            account_status: input.account_status.map(Into::into).unwrap_or_default(),
        })
    }
}
