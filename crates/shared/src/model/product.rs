use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Listing projection of a catalog product. Image bytes are deliberately not
/// part of this model so list queries never drag blobs out of the database;
/// `has_image` is computed in SQL from `image_bytes IS NOT NULL`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_active: bool,
    pub has_image: bool,
    pub image_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Binary image payload of a product, fetched only by the media endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct ProductImage {
    pub image_bytes: Option<Vec<u8>>,
    pub image_mime: Option<String>,
    pub image_sha256: Option<String>,
}
