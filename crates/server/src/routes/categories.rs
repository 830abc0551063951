use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use models::Category;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Category>> {
    Json(state.categories.get_all().await)
}

pub async fn active(State(state): State<ServerState>) -> Json<Vec<Category>> {
    Json(state.categories.get_active().await)
}

pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Json<Vec<Category>> {
    Json(state.categories.search(&q.term).await)
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, JsonApiError> {
    match state.categories.get_by_id(id).await {
        Some(category) => Ok(Json(category)),
        None => Err(JsonApiError::not_found("category", id)),
    }
}

pub async fn with_products(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, JsonApiError> {
    match state.categories.get_with_products(id).await {
        Some(category) => Ok(Json(category)),
        None => Err(JsonApiError::not_found("category", id)),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<Category>,
) -> Result<Json<Category>, JsonApiError> {
    let created = state.categories.create(input).await?;
    Ok(Json(created))
}

/// The path id is authoritative; any id in the body is replaced.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(mut input): Json<Category>,
) -> Result<Json<Category>, JsonApiError> {
    input.id = id;
    let updated = state.categories.update(input).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    match state.categories.delete(id).await? {
        true => Ok(StatusCode::NO_CONTENT),
        false => Ok(StatusCode::NOT_FOUND),
    }
}
