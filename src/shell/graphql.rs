use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::accounts::use_cases::create_account::inbound::graphql::CreateAccountMutation;
use crate::modules::accounts::use_cases::delete_account::inbound::graphql::DeleteAccountMutation;
use crate::modules::accounts::use_cases::get_account::inbound::graphql::GetAccountQuery;
use crate::modules::accounts::use_cases::list_accounts::inbound::graphql::ListAccountsQuery;
use crate::modules::accounts::use_cases::update_account::inbound::graphql::UpdateAccountMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListAccountsQuery, GetAccountQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateAccountMutation,
    UpdateAccountMutation,
    DeleteAccountMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn handle(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
