/// OpenAPI documentation for Brand Service
use utoipa::OpenApi;

use crate::handlers::brands::{BrandResponse, DeleteBrandResponse, ErrorResponse};
use crate::models::{CreateBrandRequest, UpdateBrandRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brand Service API",
        version = "0.1.0",
        description = "CRUD API for brand records and their boycott status. Brands carry a name, logo URL, boycott flag with reason, and a visibility toggle.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
    ),
    paths(
        crate::handlers::brands::list_brands,
        crate::handlers::brands::get_brand,
        crate::handlers::brands::create_brand,
        crate::handlers::brands::update_brand,
        crate::handlers::brands::delete_brand,
        crate::handlers::health::health,
    ),
    components(schemas(
        CreateBrandRequest,
        UpdateBrandRequest,
        BrandResponse,
        DeleteBrandResponse,
        ErrorResponse
    )),
    tags(
        (name = "brands", description = "Brand creation, retrieval, updates, and deletion"),
        (name = "health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api-docs/openapi.json"
    }
}
