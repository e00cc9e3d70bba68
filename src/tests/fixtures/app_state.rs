use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::accounts::adapters::outbound::account_store_in_memory::InMemoryAccountStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryAccountStore::seeded()))
}

pub async fn read_body(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}
