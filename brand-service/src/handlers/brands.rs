/// Brand handlers - HTTP endpoints for brand operations
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::brand_repo;
use crate::error::{AppError, Result};
use crate::models::{Brand, CreateBrandRequest, UpdateBrandRequest};

/// A brand as returned to API clients
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    /// 24-character hex object id
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub is_boycotted: bool,
    pub reason: String,
    pub visibility: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

impl TryFrom<Brand> for BrandResponse {
    type Error = AppError;

    fn try_from(brand: Brand) -> Result<Self> {
        let created_at = brand
            .created_at
            .try_to_rfc3339_string()
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        let updated_at = brand
            .updated_at
            .try_to_rfc3339_string()
            .map_err(|e| AppError::Serialization(e.to_string()))?;

        Ok(Self {
            id: brand.id.to_hex(),
            name: brand.name,
            logo_url: brand.logo_url,
            is_boycotted: brand.is_boycotted,
            reason: brand.reason,
            visibility: brand.visibility,
            created_at,
            updated_at,
        })
    }
}

/// Response for a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteBrandResponse {
    pub message: String,
}

/// Generic error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// List all brands
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = "brands",
    responses(
        (status = 200, description = "All stored brands", body = [BrandResponse]),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_brands(db: web::Data<Database>) -> Result<HttpResponse> {
    let brands = brand_repo::find_all_brands(db.get_ref()).await?;
    let body = brands
        .into_iter()
        .map(BrandResponse::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(HttpResponse::Ok().json(body))
}

/// Get a brand by id
#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    tag = "brands",
    params(
        ("id" = String, Path, description = "Brand identifier (24-char hex)")
    ),
    responses(
        (status = 200, description = "The requested brand", body = BrandResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn get_brand(db: web::Data<Database>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = path.into_inner();

    match brand_repo::find_brand_by_id(db.get_ref(), &id).await? {
        Some(brand) => Ok(HttpResponse::Ok().json(BrandResponse::try_from(brand)?)),
        None => Err(AppError::NotFound("Brand")),
    }
}

/// Create a new brand
#[utoipa::path(
    post,
    path = "/api/brands",
    tag = "brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = BrandResponse),
        (status = 500, description = "Validation or internal error", body = ErrorResponse)
    )
)]
pub async fn create_brand(
    db: web::Data<Database>,
    req: web::Json<CreateBrandRequest>,
) -> Result<HttpResponse> {
    let brand = brand_repo::create_brand(db.get_ref(), req.into_inner()).await?;

    Ok(HttpResponse::Created().json(BrandResponse::try_from(brand)?))
}

/// Update a brand in place
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    tag = "brands",
    params(
        ("id" = String, Path, description = "Brand identifier (24-char hex)")
    ),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "The updated brand", body = BrandResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
        (status = 500, description = "Validation or internal error", body = ErrorResponse)
    )
)]
pub async fn update_brand(
    db: web::Data<Database>,
    path: web::Path<String>,
    req: web::Json<UpdateBrandRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    match brand_repo::update_brand(db.get_ref(), &id, req.into_inner()).await? {
        Some(brand) => Ok(HttpResponse::Ok().json(BrandResponse::try_from(brand)?)),
        None => Err(AppError::NotFound("Brand")),
    }
}

/// Delete a brand
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    tag = "brands",
    params(
        ("id" = String, Path, description = "Brand identifier (24-char hex)")
    ),
    responses(
        (status = 200, description = "Brand deleted", body = DeleteBrandResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn delete_brand(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if brand_repo::delete_brand(db.get_ref(), &id).await? {
        Ok(HttpResponse::Ok().json(DeleteBrandResponse {
            message: "Brand deleted".to_string(),
        }))
    } else {
        Err(AppError::NotFound("Brand"))
    }
}

/// Register the brand resource routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/brands")
            .route("", web::get().to(list_brands))
            .route("", web::post().to(create_brand))
            .route("/{id}", web::get().to(get_brand))
            .route("/{id}", web::put().to(update_brand))
            .route("/{id}", web::delete().to(delete_brand)),
    );
}
