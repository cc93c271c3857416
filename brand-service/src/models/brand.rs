use bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, Result};

/// A brand and its boycott status, as stored in the `brands` collection.
///
/// Wire and storage field names are camelCase. Defaults for omitted fields are
/// filled by [`Brand::new`] before the document ever reaches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub is_boycotted: bool,
    #[serde(default)]
    pub reason: String,
    #[serde(default = "default_visibility")]
    pub visibility: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

fn default_visibility() -> bool {
    true
}

/// Fields accepted when creating a brand. Everything except `name` is optional.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub is_boycotted: Option<bool>,
    pub reason: Option<String>,
    pub visibility: Option<bool>,
}

/// Partial update: only the supplied fields are merged into the record.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub is_boycotted: Option<bool>,
    pub reason: Option<String>,
    pub visibility: Option<bool>,
}

impl Brand {
    /// Build a new brand record from a creation request, assigning a fresh id
    /// and filling every omitted field with its documented default.
    ///
    /// On creation `created_at == updated_at`.
    pub fn new(req: CreateBrandRequest) -> Result<Self> {
        let name = match req.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::Validation("brand name is required".to_string())),
        };

        let now = DateTime::now();
        Ok(Self {
            id: ObjectId::new(),
            name,
            logo_url: req.logo_url.unwrap_or_default(),
            is_boycotted: req.is_boycotted.unwrap_or(false),
            reason: req.reason.unwrap_or_default(),
            visibility: req.visibility.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }
}

impl UpdateBrandRequest {
    /// Build the `$set` document for this partial update.
    ///
    /// `updatedAt` is always refreshed, so the resulting `$set` is never empty
    /// and an empty request body acts as a touch-update.
    pub fn into_update_document(self) -> Result<Document> {
        let mut set = Document::new();

        if let Some(name) = self.name {
            if name.is_empty() {
                return Err(AppError::Validation(
                    "brand name cannot be empty".to_string(),
                ));
            }
            set.insert("name", name);
        }
        if let Some(logo_url) = self.logo_url {
            set.insert("logoUrl", logo_url);
        }
        if let Some(is_boycotted) = self.is_boycotted {
            set.insert("isBoycotted", is_boycotted);
        }
        if let Some(reason) = self.reason {
            set.insert("reason", reason);
        }
        if let Some(visibility) = self.visibility {
            set.insert("visibility", visibility);
        }
        set.insert("updatedAt", DateTime::now());

        Ok(doc! { "$set": set })
    }
}
