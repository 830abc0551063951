use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::category_service::CategoryService;
use service::product_service::ProductService;
use service::storage::{InMemoryCategoryStore, InMemoryProductStore};

pub mod categories;
pub mod products;

/// Concrete service types over the in-memory stores.
pub type AppCategoryService = CategoryService<InMemoryCategoryStore, InMemoryProductStore>;
pub type AppProductService = ProductService<InMemoryProductStore, InMemoryCategoryStore>;

/// Shared handler state: both services over one pair of stores.
#[derive(Clone)]
pub struct ServerState {
    pub categories: Arc<AppCategoryService>,
    pub products: Arc<AppProductService>,
}

impl ServerState {
    /// State over stores pre-loaded with the demo catalog. Both services
    /// share the same store pair, so referential checks see every write.
    pub fn seeded() -> Self {
        let category_store = InMemoryCategoryStore::new();
        let product_store = InMemoryProductStore::new();
        Self {
            categories: Arc::new(CategoryService::new(
                Arc::clone(&category_store),
                Arc::clone(&product_store),
            )),
            products: Arc::new(ProductService::new(product_store, category_store)),
        }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. Fixed segments such as `active`
/// and `search` sit beside the `:id` captures; the router matches the
/// fixed ones first.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route("/api/categories/active", get(categories::active))
        .route("/api/categories/search", get(categories::search))
        .route(
            "/api/categories/:id",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route(
            "/api/categories/:id/products",
            get(categories::with_products),
        )
        .route(
            "/api/products",
            get(products::list).post(products::create),
        )
        .route("/api/products/active", get(products::active))
        .route("/api/products/search", get(products::search))
        .route("/api/products/price-range", get(products::price_range))
        .route(
            "/api/products/category/:category_id",
            get(products::by_category),
        )
        .route(
            "/api/products/:id",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
