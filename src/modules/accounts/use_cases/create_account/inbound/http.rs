use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::accounts::core::account::Account;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Account>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(account) = body?;
    let account_number = account.account_number;
    let location = account.location();

    state.accounts.create(account).await?;
    tracing::info!(account_number, "account created");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}
