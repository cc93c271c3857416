/// Data models for brand-service
pub mod brand;

pub use brand::{Brand, CreateBrandRequest, UpdateBrandRequest};
