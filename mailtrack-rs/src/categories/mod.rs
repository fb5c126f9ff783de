//! Email categories

pub mod manager;
pub mod types;

pub use manager::CategoryManager;
pub use types::{Category, CreateCategoryRequest, UpdateCategoryRequest};
