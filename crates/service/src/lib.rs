//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules from data access behind repository traits.
//! - In-memory stores own id generation and the seed catalog.
//! - Provides clear error types for the HTTP boundary.

pub mod category_service;
pub mod errors;
pub mod product_service;
pub mod repository;
pub mod storage;
