use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use models::{product, Product};

use crate::errors::ServiceError;
use crate::repository::{CategoryRepository, ProductRepository};

/// Product business service independent of web framework. Writes check
/// the referenced category against the category repository first.
pub struct ProductService<P: ProductRepository, C: CategoryRepository> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P: ProductRepository, C: CategoryRepository> ProductService<P, C> {
    pub fn new(products: Arc<P>, categories: Arc<C>) -> Self {
        Self { products, categories }
    }

    pub async fn get_all(&self) -> Vec<Product> {
        self.products.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Product> {
        self.products.get_by_id(id).await
    }

    pub async fn get_active(&self) -> Vec<Product> {
        self.products.get_active_products().await
    }

    /// Products of one category; the category itself must exist.
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Product>, ServiceError> {
        self.ensure_category(category_id).await?;
        Ok(self.products.get_by_category_id(category_id).await)
    }

    /// Name search; a blank term means no filter and returns everything.
    pub async fn search(&self, term: &str) -> Vec<Product> {
        if term.trim().is_empty() {
            return self.products.get_all().await;
        }
        self.products.search_by_name(term).await
    }

    /// Products priced inside `[min, max]`, bounds inclusive.
    pub async fn get_in_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, ServiceError> {
        if min < Decimal::ZERO || max < Decimal::ZERO {
            return Err(ServiceError::Validation(
                "price bounds must not be negative".to_string(),
            ));
        }
        if min > max {
            return Err(ServiceError::Validation(
                "minimum price must not exceed maximum".to_string(),
            ));
        }
        Ok(self.products.get_products_in_price_range(min, max).await)
    }

    /// Create a product after checking its category, price and name.
    #[instrument(skip(self, product), fields(name = %product.name, category_id = product.category_id))]
    pub async fn create(&self, product: Product) -> Result<Product, ServiceError> {
        self.ensure_category(product.category_id).await?;
        product::validate_price(product.price)?;
        product::validate_name(&product.name)?;

        let created = self.products.add(product).await;
        info!(id = created.id, name = %created.name, "product_created");
        Ok(created)
    }

    /// Update an existing product; the target category must exist and the
    /// price must stay positive.
    #[instrument(skip(self, product), fields(id = product.id))]
    pub async fn update(&self, product: Product) -> Result<Product, ServiceError> {
        if !self.products.exists(product.id).await {
            return Err(ServiceError::Validation(format!(
                "product {} does not exist",
                product.id
            )));
        }
        self.ensure_category(product.category_id).await?;
        product::validate_price(product.price)?;

        let updated = self.products.update(product).await?;
        info!(id = updated.id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        if !self.products.exists(id).await {
            return Err(ServiceError::Validation(format!(
                "product {id} does not exist"
            )));
        }

        let deleted = self.products.delete(id).await;
        info!(id, "product_deleted");
        Ok(deleted)
    }

    async fn ensure_category(&self, category_id: i32) -> Result<(), ServiceError> {
        if !self.categories.exists(category_id).await {
            return Err(ServiceError::Validation(format!(
                "category {category_id} does not exist"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryCategoryStore, InMemoryProductStore};

    fn seeded() -> ProductService<InMemoryProductStore, InMemoryCategoryStore> {
        ProductService::new(InMemoryProductStore::new(), InMemoryCategoryStore::new())
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let result = svc
            .create(Product::new("Webcam", "", Decimal::new(7_999, 2), 99, true))
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_non_positive_price() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let zero = svc
            .create(Product::new("Freebie", "", Decimal::ZERO, 1, true))
            .await;
        assert!(matches!(zero, Err(ServiceError::Validation(_))));

        let negative = svc
            .create(Product::new("Refund", "", Decimal::new(-100, 2), 1, true))
            .await;
        assert!(matches!(negative, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_name() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let result = svc
            .create(Product::new("  ", "", Decimal::ONE, 1, true))
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_fresh_id() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let created = svc
            .create(Product::new(
                "Monitor",
                "27\" 4K IPS panel",
                Decimal::new(39_900, 2),
                1,
                true,
            ))
            .await?;
        assert_eq!(created.id, 6);
        assert_eq!(svc.get_all().await.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_validation() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let mut ghost = Product::new("Ghost", "", Decimal::ONE, 1, true);
        ghost.id = 99;
        let result = svc.update(ghost).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_unknown_category_and_bad_price() -> Result<(), anyhow::Error> {
        let svc = seeded();

        let mut moved = svc.get_by_id(1).await.unwrap();
        moved.category_id = 99;
        assert!(matches!(
            svc.update(moved).await,
            Err(ServiceError::Validation(_))
        ));

        let mut repriced = svc.get_by_id(1).await.unwrap();
        repriced.price = Decimal::ZERO;
        assert!(matches!(
            svc.update(repriced).await,
            Err(ServiceError::Validation(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn update_moves_product_between_categories() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let mut dock = svc.get_by_id(4).await.unwrap();
        dock.category_id = 3;
        let updated = svc.update(dock).await?;
        assert_eq!(updated.category_id, 3);
        assert_eq!(svc.get_by_category(3).await?.len(), 1);
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
    async fn delete_removes_the_product() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert!(svc.delete(5).await?);
        assert!(svc.get_by_id(5).await.is_none());
        assert_eq!(svc.get_all().await.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn get_by_category_requires_existing_category() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert!(matches!(
            svc.get_by_category(99).await,
            Err(ServiceError::Validation(_))
        ));
        let electronics = svc.get_by_category(1).await?;
        assert_eq!(
            electronics.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 4]
        );
        Ok(())
    }

    #[tokio::test]
    async fn price_range_rejects_negative_and_inverted_bounds() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert!(matches!(
            svc.get_in_price_range(Decimal::new(-1, 0), Decimal::TEN).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            svc.get_in_price_range(Decimal::TEN, Decimal::ONE).await,
            Err(ServiceError::Validation(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn price_range_filters_inclusively() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let mid = svc
            .get_in_price_range(Decimal::new(40, 0), Decimal::new(160, 0))
            .await?;
        assert_eq!(
            mid.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 4, 5]
        );
        Ok(())
    }

    #[tokio::test]
    async fn blank_search_term_returns_all() -> Result<(), anyhow::Error> {
        let svc = seeded();
        assert_eq!(svc.search("").await.len(), 5);
        let hits = svc.search("keyboard").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn active_listing_skips_inactive_products() -> Result<(), anyhow::Error> {
        let svc = seeded();
        let active = svc.get_active().await;
        assert_eq!(
            active.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        Ok(())
    }
}
