use axum::{Extension, Router, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::create_account::inbound::http as create_http;
use crate::modules::accounts::use_cases::delete_account::inbound::http as delete_http;
use crate::modules::accounts::use_cases::get_account::inbound::http as get_http;
use crate::modules::accounts::use_cases::list_accounts::inbound::http as list_http;
use crate::modules::accounts::use_cases::update_account::inbound::http as update_http;
use crate::shared::http::api_error::{fallback, method_not_allowed, panic_response};
use crate::shell::graphql::{self, GRAPHQL_PATH, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            "/accounts",
            get(list_http::handle)
                .post(create_http::handle)
                .put(update_http::handle),
        )
        .route(
            "/accounts/{account_number}",
            get(get_http::handle).delete(delete_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::handle))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(Extension(schema))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
