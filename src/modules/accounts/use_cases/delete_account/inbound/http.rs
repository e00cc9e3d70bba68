use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(account_number) = path?;
    let removed = state.accounts.delete(account_number).await;
    tracing::info!(account_number, removed, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
