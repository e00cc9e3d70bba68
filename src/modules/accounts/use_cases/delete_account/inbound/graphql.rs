use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteAccountMutation;

#[Object]
impl DeleteAccountMutation {
    /// True when a record was removed.
    async fn delete_account(&self, context: &Context<'_>, account_number: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let removed = state.accounts.delete(account_number).await;
        tracing::info!(account_number, removed, "account deleted");
        Ok(removed)
    }
}
