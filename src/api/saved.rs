use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::identity::Identity;
use super::types::SaveFortuneRequest;
use super::validation::{parse_fortune_ref, parse_id};
use super::{ApiError, AppState};
use crate::models::SavedFortune;
use crate::store::SavedEntry;

pub async fn list_saved(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
) -> Result<Json<Vec<SavedEntry>>, ApiError> {
    let entries = state
        .store
        .ledger
        .list_for_user(user_id, &state.store.catalog)
        .await;
    Ok(Json(entries))
}

pub async fn save_fortune(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
    payload: Result<Json<SaveFortuneRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedFortune>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::invalid_body(e.body_text()))?;
    let fortune_id = parse_fortune_ref(&payload)?;

    // The ledger does not validate references; check here before saving.
    if state.store.catalog.get(fortune_id).await.is_none() {
        return Err(ApiError::fortune_not_found(fortune_id));
    }

    let saved = state.store.ledger.save(user_id, fortune_id).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn delete_saved(
    State(state): State<Arc<AppState>>,
    Identity(_user_id): Identity,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "id")?;

    if state.store.ledger.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::saved_fortune_not_found(id))
    }
}

pub async fn clear_saved(
    State(state): State<Arc<AppState>>,
    Identity(user_id): Identity,
) -> Result<StatusCode, ApiError> {
    state.store.ledger.clear_for_user(user_id).await;
    Ok(StatusCode::NO_CONTENT)
}
