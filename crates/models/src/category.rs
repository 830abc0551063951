use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::product::Product;

/// A product category.
///
/// `id` and `created_at` are assigned by the owning store. `products` is
/// transient: stored rows keep it `None`, and the service layer fills it in
/// for the with-products read; it is dropped from JSON when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl Category {
    /// Build an unsaved category; the store assigns `id` and `created_at`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            is_active,
            created_at: Utc::now(),
            products: None,
        }
    }
}

/// Reject empty or whitespace-only category names.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("category name must not be empty".into()));
    }
    Ok(())
}
