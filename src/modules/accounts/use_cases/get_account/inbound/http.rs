use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::accounts::core::account::Account;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Account>, ApiError> {
    let Path(account_number) = path?;
    let account = state.accounts.get_by_number(account_number).await?;
    Ok(Json(account))
}
