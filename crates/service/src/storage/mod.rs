//! In-memory storage backends for the service layer.
//!
//! Each store keeps its rows and id counter behind a single `RwLock`,
//! so reads run concurrently and every write sees a consistent table.

pub mod category_store;
pub mod product_store;

mod table;

pub use category_store::InMemoryCategoryStore;
pub use product_store::InMemoryProductStore;
