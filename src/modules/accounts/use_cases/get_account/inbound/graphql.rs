use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::accounts::adapters::inbound::graphql::GqlAccount;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetAccountQuery;

#[Object]
impl GetAccountQuery {
    async fn account(&self, context: &Context<'_>, account_number: i64) -> GqlResult<GqlAccount> {
        let state = context.data_unchecked::<AppState>();
        let account = state
            .accounts
            .get_by_number(account_number)
            .await
            .map_err(|e| ApiError::from(e).into_graphql_error())?;
        Ok(account.into())
    }
}
