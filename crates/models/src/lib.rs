//! Entity records for the catalog: plain data types shared by the service
//! and HTTP layers, plus the field-level validation helpers services call
//! before touching a store.

pub mod category;
pub mod errors;
pub mod product;

pub use category::Category;
pub use errors::ModelError;
pub use product::Product;
