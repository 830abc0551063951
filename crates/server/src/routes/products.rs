use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use models::Product;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
}

/// Both bounds are required; a missing or malformed bound rejects the
/// request before the handler runs.
#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min: Decimal,
    pub max: Decimal,
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.products.get_all().await)
}

pub async fn active(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.products.get_active().await)
}

pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    Json(state.products.search(&q.term).await)
}

pub async fn price_range(
    State(state): State<ServerState>,
    Query(q): Query<PriceRangeQuery>,
) -> Result<Json<Vec<Product>>, JsonApiError> {
    let found = state.products.get_in_price_range(q.min, q.max).await?;
    Ok(Json(found))
}

pub async fn by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<Product>>, JsonApiError> {
    let found = state.products.get_by_category(category_id).await?;
    Ok(Json(found))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, JsonApiError> {
    match state.products.get_by_id(id).await {
        Some(product) => Ok(Json(product)),
        None => Err(JsonApiError::not_found("product", id)),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<Product>,
) -> Result<Json<Product>, JsonApiError> {
    let created = state.products.create(input).await?;
    Ok(Json(created))
}

/// The path id is authoritative; any id in the body is replaced.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(mut input): Json<Product>,
) -> Result<Json<Product>, JsonApiError> {
    input.id = id;
    let updated = state.products.update(input).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    match state.products.delete(id).await? {
        true => Ok(StatusCode::NO_CONTENT),
        false => Ok(StatusCode::NOT_FOUND),
    }
}
