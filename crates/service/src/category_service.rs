use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::{category, Category};

use crate::errors::ServiceError;
use crate::repository::{CategoryRepository, ProductRepository};

/// Category business service independent of web framework.
///
/// Holds the product repository as well: delete refuses to orphan
/// products, and the with-products read attaches them.
pub struct CategoryService<C: CategoryRepository, P: ProductRepository> {
    categories: Arc<C>,
    products: Arc<P>,
}

impl<C: CategoryRepository, P: ProductRepository> CategoryService<C, P> {
    pub fn new(categories: Arc<C>, products: Arc<P>) -> Self {
        Self { categories, products }
    }

    pub async fn get_all(&self) -> Vec<Category> {
        self.categories.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Category> {
        self.categories.get_by_id(id).await
    }

    pub async fn get_active(&self) -> Vec<Category> {
        self.categories.get_active_categories().await
    }

    /// Category with its products attached, `None` when the id is unknown.
    pub async fn get_with_products(&self, id: i32) -> Option<Category> {
        let mut found = self.categories.get_category_with_products(id).await?;
        found.products = Some(self.products.get_by_category_id(id).await);
        Some(found)
    }

    /// Name search; a blank term means no filter and returns everything.
    pub async fn search(&self, term: &str) -> Vec<Category> {
        if term.trim().is_empty() {
            return self.categories.get_all().await;
        }
        self.categories.search_by_name(term).await
    }

    /// Create a category after validating its name and name uniqueness.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create(&self, category: Category) -> Result<Category, ServiceError> {
        category::validate_name(&category.name)?;
        self.ensure_name_free(&category.name, None).await?;

        let created = self.categories.add(category).await;
        info!(id = created.id, name = %created.name, "category_created");
        Ok(created)
    }

    /// Update an existing category, keeping the uniqueness rule while
    /// letting it retain its own name.
    #[instrument(skip(self, category), fields(id = category.id))]
    pub async fn update(&self, category: Category) -> Result<Category, ServiceError> {
        if !self.categories.exists(category.id).await {
            return Err(ServiceError::Validation(format!(
                "category {} does not exist",
                category.id
            )));
        }
        category::validate_name(&category.name)?;
        self.ensure_name_free(&category.name, Some(category.id)).await?;

        let updated = self.categories.update(category).await?;
        info!(id = updated.id, "category_updated");
        Ok(updated)
    }

    /// Delete a category; refused while any product still references it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        if !self.categories.exists(id).await {
            return Err(ServiceError::Validation(format!(
                "category {id} does not exist"
            )));
        }

        let referencing = self.products.get_by_category_id(id).await;
        if !referencing.is_empty() {
            debug!(id, products = referencing.len(), "category_delete_blocked");
            return Err(ServiceError::Conflict(format!(
                "category {id} still has {} product(s)",
                referencing.len()
            )));
        }

        let deleted = self.categories.delete(id).await;
        info!(id, "category_deleted");
        Ok(deleted)
    }

    /// Uniqueness is case-insensitive; `exclude_id` lets an update keep
    /// the row's current name.
    async fn ensure_name_free(&self, name: &str, exclude_id: Option<i32>) -> Result<(), ServiceError> {
        let wanted = name.to_lowercase();
        let taken = self
            .categories
            .get_all()
            .await
            .iter()
            .any(|c| Some(c.id) != exclude_id && c.name.to_lowercase() == wanted);
        if taken {
            return Err(ServiceError::Validation(format!(
                "category name '{name}' is already in use"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryCategoryStore, InMemoryProductStore};

    fn seeded() -> CategoryService<InMemoryCategoryStore, InMemoryProductStore> {
        CategoryService::new(InMemoryCategoryStore::new(), InMemoryProductStore::new())
    }

    #[tokio::test]
    async fn create_rejects_blank_name() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let result = svc.create(Category::new("   ", "blank", true)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_ignoring_case() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let result = svc.create(Category::new("ELECTRONICS", "dupe", true)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_fresh_id() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let created = svc
            .create(Category::new("Outdoors", "Camping and hiking gear", true))
            .await?;
        assert_eq!(created.id, 4);
        assert_eq!(svc.get_all().await.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_validation() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let mut ghost = Category::new("Ghost", "", true);
        ghost.id = 99;
        let result = svc.update(ghost).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_name_taken_by_another_category() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let mut books = svc.get_by_id(2).await.unwrap();
        books.name = "electronics".to_string();
        let result = svc.update(books).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_lets_a_category_keep_its_own_name() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let mut books = svc.get_by_id(2).await.unwrap();
        books.description = "Paper, audio and electronic books".to_string();
        let updated = svc.update(books).await?;
        assert_eq!(updated.name, "Books");
        assert_eq!(updated.description, "Paper, audio and electronic books");
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_refused_while_products_reference_it() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let result = svc.delete(1).await;
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
        assert!(svc.get_by_id(1).await.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_unreferenced_category_succeeds() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert!(svc.delete(3).await?);
        assert!(svc.get_by_id(3).await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_validation() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let result = svc.delete(99).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn with_products_attaches_referencing_products() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let books = svc.get_with_products(2).await.unwrap();
        let attached = books.products.unwrap();
        assert_eq!(attached.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 5]);
        Ok(())
    }

    #[tokio::test]
    async fn with_products_of_unknown_id_is_none() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert!(svc.get_with_products(99).await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn blank_search_term_returns_all() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert_eq!(svc.search("  ").await.len(), 3);
        assert_eq!(svc.search("book").await.len(), 1);
        Ok(())
    }
}
