/// HTTP request handlers
pub mod brands;
pub mod health;

pub use brands::{create_brand, delete_brand, get_brand, list_brands, update_brand};
