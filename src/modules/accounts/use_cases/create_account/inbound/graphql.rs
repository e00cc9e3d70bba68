use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::accounts::adapters::inbound::graphql::{AccountInput, GqlAccount};
use crate::modules::accounts::core::account::Account;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateAccountMutation;

#[Object]
impl CreateAccountMutation {
    async fn create_account(
        &self,
        context: &Context<'_>,
        input: AccountInput,
    ) -> GqlResult<GqlAccount> {
        let state = context.data_unchecked::<AppState>();
        let account = Account::try_from(input).map_err(ApiError::into_graphql_error)?;

        state
            .accounts
            .create(account.clone())
            .await
            .map_err(|e| ApiError::from(e).into_graphql_error())?;
        tracing::info!(account_number = account.account_number, "account created");

        Ok(account.into())
    }
}
