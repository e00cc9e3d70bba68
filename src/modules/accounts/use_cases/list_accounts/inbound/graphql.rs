use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::accounts::adapters::inbound::graphql::GqlAccount;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListAccountsQuery;

#[Object]
impl ListAccountsQuery {
    async fn accounts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlAccount>> {
        let state = context.data_unchecked::<AppState>();
        let accounts = state.accounts.list_all().await;
        Ok(accounts.into_iter().map(Into::into).collect())
    }
}
