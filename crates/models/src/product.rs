use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A catalog product referencing its category by id.
///
/// `id`, `created_at` and `updated_at` are assigned by the owning store;
/// `updated_at` equals `created_at` until the first update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build an unsaved product; the store assigns `id` and the timestamps.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category_id: i32,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            price,
            category_id,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Reject empty or whitespace-only product names.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("product name must not be empty".into()));
    }
    Ok(())
}

/// Prices must be strictly positive.
pub fn validate_price(price: Decimal) -> Result<(), ModelError> {
    if price <= Decimal::ZERO {
        return Err(ModelError::Validation("product price must be greater than zero".into()));
    }
    Ok(())
}
