use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::accounts::adapters::inbound::graphql::{AccountInput, GqlAccount};
use crate::modules::accounts::core::account::Account;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateAccountMutation;

#[Object]
impl UpdateAccountMutation {
    async fn update_account(
        &self,
        context: &Context<'_>,
        input: AccountInput,
    ) -> GqlResult<GqlAccount> {
        let state = context.data_unchecked::<AppState>();
        let account = Account::try_from(input).map_err(ApiError::into_graphql_error)?;

        let updated = state
            .accounts
            .update(account)
            .await
            .map_err(|e| ApiError::from(e).into_graphql_error())?;
        tracing::info!(account_number = updated.account_number, "account updated");

        Ok(updated.into())
    }
}

#[cfg(test)]
mod update_account_graphql_inbound_tests {
    use crate::shell::graphql::build_schema;
    use crate::tests::fixtures::app_state::make_test_state;

    #[tokio::test]
    async fn it_should_replace_the_account() {
        let state = make_test_state();
        let schema = build_schema(state.clone());
        let response = schema
            .execute(
                r#"mutation { updateAccount(input: {
                    accountNumber: 123456789, routingNumber: 987654321,
                    customerName: "George Baird", balance: "0.00", accountStatus: CLOSED
                }) { balance accountStatus } }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["updateAccount"]["balance"], "0.00");
        assert_eq!(data["updateAccount"]["accountStatus"], "CLOSED");
    }

    #[tokio::test]
    async fn it_should_fail_for_an_unknown_account() {
        let schema = build_schema(make_test_state());
        let response = schema
            .execute(
                r#"mutation { updateAccount(input: {
                    accountNumber: 1, routingNumber: 2, customerName: "x", balance: "1"
                }) { balance } }"#,
            )
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "an illegal argument was provided: 404: Account with id of 1 does not exist"
        );
    }
}
