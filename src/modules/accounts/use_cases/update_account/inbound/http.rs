use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::modules::accounts::core::account::Account;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

/// The account number in the body decides which record is replaced.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Account>, JsonRejection>,
) -> Result<Json<Account>, ApiError> {
    let Json(account) = body?;
    let updated = state.accounts.update(account).await?;
    tracing::info!(account_number = updated.account_number, "account updated");
    Ok(Json(updated))
}
