use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use models::Product;

use crate::repository::{ProductRepository, Repository, StoreError};
use crate::storage::table::{HasId, Table};

impl HasId for Product {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Thread-safe in-memory product store, same locking shape as the
/// category store: one lock over rows plus the id counter.
pub struct InMemoryProductStore {
    inner: RwLock<Table<Product>>,
}

impl InMemoryProductStore {
    /// Store pre-loaded with the demo catalog. Category ids refer to the
    /// seeded category store.
    pub fn new() -> Arc<Self> {
        let now = Utc::now();
        let seed = vec![
            Product {
                id: 1,
                name: "Laptop".to_string(),
                description: "15\" developer laptop".to_string(),
                price: Decimal::new(129_999, 2),
                category_id: 1,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
            Product {
                id: 2,
                name: "Mechanical Keyboard".to_string(),
                description: "Tenkeyless, hot-swappable switches".to_string(),
                price: Decimal::new(8_999, 2),
                category_id: 1,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
            Product {
                id: 3,
                name: "The Rust Programming Language".to_string(),
                description: "Second edition, paperback".to_string(),
                price: Decimal::new(5_999, 2),
                category_id: 2,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
            Product {
                id: 4,
                name: "USB-C Dock".to_string(),
                description: "Dual display, 100W passthrough".to_string(),
                price: Decimal::new(4_550, 2),
                category_id: 1,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
            Product {
                id: 5,
                name: "Refactoring".to_string(),
                description: "Second edition, hardcover".to_string(),
                price: Decimal::new(4_799, 2),
                category_id: 2,
                is_active: false,
                created_at: now,
                updated_at: now,
            },
        ];
        Arc::new(Self {
            inner: RwLock::new(Table::new(seed)),
        })
    }

    /// Store with no rows, for tests that want full control over contents.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(Table::new(Vec::new())),
        })
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductStore {
    async fn get_all(&self) -> Vec<Product> {
        self.inner.read().await.rows.clone()
    }

    async fn get_by_id(&self, id: i32) -> Option<Product> {
        self.inner.read().await.find(id).cloned()
    }

    async fn add(&self, mut entity: Product) -> Product {
        let mut table = self.inner.write().await;
        let now = Utc::now();
        entity.id = table.allocate_id();
        entity.created_at = now;
        entity.updated_at = now;
        table.rows.push(entity.clone());
        entity
    }

    async fn update(&self, entity: Product) -> Result<Product, StoreError> {
        let mut table = self.inner.write().await;
        let row = table.find_mut(entity.id).ok_or(StoreError::UpdateMissing {
            entity: "product",
            id: entity.id,
        })?;
        row.name = entity.name;
        row.description = entity.description;
        row.price = entity.price;
        row.category_id = entity.category_id;
        row.is_active = entity.is_active;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> bool {
        self.inner.write().await.remove(id)
    }

    async fn exists(&self, id: i32) -> bool {
        self.inner.read().await.find(id).is_some()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn get_by_category_id(&self, category_id: i32) -> Vec<Product> {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect()
    }

    async fn get_active_products(&self) -> Vec<Product> {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect()
    }

    async fn search_by_name(&self, term: &str) -> Vec<Product> {
        let wanted = term.to_lowercase();
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&wanted))
            .cloned()
            .collect()
    }

    async fn get_products_in_price_range(&self, min: Decimal, max: Decimal) -> Vec<Product> {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .cloned()
            .collect()
    }
}
