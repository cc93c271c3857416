use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::error::{AppError, Result};
use crate::models::{Brand, CreateBrandRequest, UpdateBrandRequest};

const COLLECTION: &str = "brands";

fn brands(db: &Database) -> Collection<Brand> {
    db.collection::<Brand>(COLLECTION)
}

fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::Validation(format!("invalid brand id '{}': {}", id, e)))
}

/// Create a new brand record
/// Returns the full stored record including the generated id and timestamps
pub async fn create_brand(db: &Database, req: CreateBrandRequest) -> Result<Brand> {
    let brand = Brand::new(req)?;
    brands(db).insert_one(&brand).await?;

    Ok(brand)
}

/// Fetch every stored brand, order unspecified
pub async fn find_all_brands(db: &Database) -> Result<Vec<Brand>> {
    let cursor = brands(db).find(doc! {}).await?;
    let all = cursor.try_collect().await?;

    Ok(all)
}

/// Find a brand by id; `Ok(None)` when no record matches
pub async fn find_brand_by_id(db: &Database, id: &str) -> Result<Option<Brand>> {
    let oid = parse_object_id(id)?;
    let brand = brands(db).find_one(doc! { "_id": oid }).await?;

    Ok(brand)
}

/// Merge the supplied fields into an existing brand, refreshing `updatedAt`.
/// Returns the updated record, or `Ok(None)` when no record matches.
pub async fn update_brand(
    db: &Database,
    id: &str,
    req: UpdateBrandRequest,
) -> Result<Option<Brand>> {
    let oid = parse_object_id(id)?;
    let update = req.into_update_document()?;

    let brand = brands(db)
        .find_one_and_update(doc! { "_id": oid }, update)
        .return_document(ReturnDocument::After)
        .await?;

    Ok(brand)
}

/// Hard-delete a brand by id; `Ok(false)` when no record matched
pub async fn delete_brand(db: &Database, id: &str) -> Result<bool> {
    let oid = parse_object_id(id)?;
    let deleted = brands(db).find_one_and_delete(doc! { "_id": oid }).await?;

    Ok(deleted.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_id_accepts_hex() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn parse_object_id_rejects_malformed_input() {
        for bad in ["", "not-a-hex-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert!(matches!(
                parse_object_id(bad),
                Err(AppError::Validation(_))
            ));
        }
    }
}
