use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use models::{Category, Product};

/// Contract violation raised by a store itself. Reads signal absence through
/// `Option` and `delete` through `bool`; only `update` against an id nobody
/// checked for existence is an error, and hitting it means the caller
/// skipped its pre-check.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} update for missing id {id}: existence must be checked before update")]
    UpdateMissing { entity: &'static str, id: i32 },
}

/// Generic CRUD contract shared by every entity store.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Every entity, in the store's current order.
    async fn get_all(&self) -> Vec<T>;

    /// Entity by id; `None` when absent.
    async fn get_by_id(&self, id: i32) -> Option<T>;

    /// Assigns id and creation timestamp, appends, returns the stored form.
    async fn add(&self, entity: T) -> T;

    /// Overwrites the mutable fields of the row carrying the entity's id.
    /// `id` and `created_at` never change after creation.
    async fn update(&self, entity: T) -> Result<T, StoreError>;

    /// Removes by id; `false` (not an error) when nothing was there.
    async fn delete(&self, id: i32) -> bool;

    /// Membership check by id.
    async fn exists(&self, id: i32) -> bool;
}

/// Category-specific queries on top of the CRUD contract.
#[async_trait]
pub trait CategoryRepository: Repository<Category> {
    /// Categories with `is_active` set.
    async fn get_active_categories(&self) -> Vec<Category>;

    /// Lookup backing the with-products read. Product attachment is the
    /// service layer's job, so at store level this is `get_by_id`.
    async fn get_category_with_products(&self, id: i32) -> Option<Category>;

    /// Case-insensitive substring match on name. Empty terms are the
    /// caller's problem, not handled here.
    async fn search_by_name(&self, term: &str) -> Vec<Category>;
}

/// Product-specific queries on top of the CRUD contract.
#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// Products referencing the category; empty when the category is
    /// unknown, since this layer does no foreign-key validation.
    async fn get_by_category_id(&self, category_id: i32) -> Vec<Product>;

    /// Products with `is_active` set.
    async fn get_active_products(&self) -> Vec<Product>;

    /// Case-insensitive substring match on name.
    async fn search_by_name(&self, term: &str) -> Vec<Product>;

    /// Products priced inside `[min, max]`, bounds inclusive. Range sanity
    /// is the service layer's job.
    async fn get_products_in_price_range(&self, min: Decimal, max: Decimal) -> Vec<Product>;
}
