use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use models::Category;

use crate::repository::{CategoryRepository, Repository, StoreError};
use crate::storage::table::{HasId, Table};

impl HasId for Category {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Thread-safe in-memory category store. Rows and the id counter live
/// under a single lock, so a concurrent add can never observe a stale
/// counter.
pub struct InMemoryCategoryStore {
    inner: RwLock<Table<Category>>,
}

impl InMemoryCategoryStore {
    /// Store pre-loaded with the demo catalog.
    pub fn new() -> Arc<Self> {
        let now = Utc::now();
        let seed = vec![
            Category {
                id: 1,
                name: "Electronics".to_string(),
                description: "Phones, laptops and accessories".to_string(),
                is_active: true,
                created_at: now,
                products: None,
            },
            Category {
                id: 2,
                name: "Books".to_string(),
                description: "Printed and electronic books".to_string(),
                is_active: true,
                created_at: now,
                products: None,
            },
            Category {
                id: 3,
                name: "Furniture".to_string(),
                description: "Home and office furniture".to_string(),
                is_active: false,
                created_at: now,
                products: None,
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
impl Repository<Category> for InMemoryCategoryStore {
    async fn get_all(&self) -> Vec<Category> {
        self.inner.read().await.rows.clone()
    }

    async fn get_by_id(&self, id: i32) -> Option<Category> {
        self.inner.read().await.find(id).cloned()
    }

    async fn add(&self, mut entity: Category) -> Category {
        let mut table = self.inner.write().await;
        entity.id = table.allocate_id();
        entity.created_at = Utc::now();
        // The products field is a read-model attachment, never stored.
        entity.products = None;
        table.rows.push(entity.clone());
        entity
    }

    async fn update(&self, entity: Category) -> Result<Category, StoreError> {
        let mut table = self.inner.write().await;
        let row = table.find_mut(entity.id).ok_or(StoreError::UpdateMissing {
            entity: "category",
            id: entity.id,
        })?;
        row.name = entity.name;
        row.description = entity.description;
        row.is_active = entity.is_active;
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
impl CategoryRepository for InMemoryCategoryStore {
    async fn get_active_categories(&self) -> Vec<Category> {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect()
    }

    async fn get_category_with_products(&self, id: i32) -> Option<Category> {
        self.get_by_id(id).await
    }

    async fn search_by_name(&self, term: &str) -> Vec<Category> {
        let wanted = term.to_lowercase();
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&wanted))
            .cloned()
            .collect()
    }
}
