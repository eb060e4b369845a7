use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::types::{CreateFortuneRequest, RandomParams};
use super::validation::{parse_category, parse_id, parse_new_fortune};
use super::{ApiError, AppState};
use crate::models::Fortune;

pub async fn list_fortunes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Fortune>>, ApiError> {
    Ok(Json(state.store.catalog.all().await))
}

pub async fn list_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Fortune>>, ApiError> {
    let category = parse_category(&category)?;
    Ok(Json(state.store.catalog.by_category(category).await))
}

pub async fn random_fortune(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomParams>,
) -> Result<Json<Fortune>, ApiError> {
    // An empty ?category= means no filter, matching the original behavior.
    let category = match params.category.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_category(raw)?),
        _ => None,
    };

    state
        .store
        .catalog
        .random(category)
        .await
        .map(Json)
        .ok_or_else(ApiError::no_fortunes)
}

pub async fn get_fortune(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Fortune>, ApiError> {
    let id = parse_id(&id, "id")?;
    state
        .store
        .catalog
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::fortune_not_found(id))
}

pub async fn create_fortune(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateFortuneRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Fortune>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::invalid_body(e.body_text()))?;

    let max_message_length = state.config.read().await.catalog.max_message_length;
    let (message, category) = parse_new_fortune(&payload, max_message_length)?;

    let fortune = state.store.catalog.create(message, category).await;
    Ok((StatusCode::CREATED, Json(fortune)))
}
