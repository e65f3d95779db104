use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Alternate addressing scheme over the same active listing: a raw
/// offset/limit window instead of page numbers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindProductsWindow {
    #[serde(default)]
    pub offset: i64,

    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    #[schema(example = "Corner shelf bracket")]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 4990)]
    pub price_cents: i64,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_cents: i64,

    pub image_url: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Validated image payload persisted as one atomic update:
/// bytes, MIME type and content hash always travel together.
#[derive(Debug, Clone)]
pub struct StoreImageRequest {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub sha256: String,
}

impl StoreImageRequest {
    /// Validate an upload against the PNG/JPEG allow-list and compute its
    /// content hash. Fails before anything reaches the database.
    pub fn from_upload(
        bytes: Vec<u8>,
        declared_mime: &str,
    ) -> Result<Self, crate::errors::ServiceError> {
        let mime = crate::utils::validate_image_upload(&bytes, declared_mime)?;
        let sha256 = crate::utils::sha256_hex(&bytes);

        Ok(StoreImageRequest {
            bytes,
            mime: mime.to_string(),
            sha256,
        })
    }
}
