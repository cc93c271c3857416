/// Brand Service Library
///
/// CRUD API for brand records and their boycott status, backed by MongoDB.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the brand resource
/// - `models`: Brand document and request/response structures
/// - `db`: Database access layer (brand repository)
/// - `error`: Error types and HTTP status mapping
/// - `config`: Configuration management
/// - `openapi`: Generated API documentation
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;

pub use config::Config;
pub use error::{AppError, Result};
