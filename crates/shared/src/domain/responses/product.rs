use crate::model::Product as ProductModel;
use crate::utils::{PLACEHOLDER_IMAGE, format_cents, media_path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resolve the externally-facing image locator of a product.
///
/// Stored bytes win over an external URL; a product with neither gets the
/// placeholder. The locator is always derived, never persisted.
pub fn resolve_image_url(product: &ProductModel) -> String {
    if product.has_image {
        return media_path(product.product_id);
    }

    match product.image_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Public storefront projection of a product.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Two-decimal price string, e.g. `"49.90"`.
    #[schema(example = "49.90")]
    pub price: String,
    pub image_url: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        let image_url = resolve_image_url(&value);

        ProductResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: format_cents(value.price_cents),
            image_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

/// Admin projection: also exposes the raw cents, the active flag and the
/// stored external URL so the dashboard can show trashed products and
/// pre-fill edit forms without losing state on save.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductAdminResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub price_cents: i64,
    pub is_active: bool,
    pub image_url: String,
    /// The external URL as stored, distinct from the resolved `image_url`.
    pub external_image_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductAdminResponse {
    fn from(value: ProductModel) -> Self {
        let external_image_url = value.image_url.clone();
        let image_url = resolve_image_url(&value);

        ProductAdminResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: format_cents(value.price_cents),
            price_cents: value.price_cents,
            is_active: value.is_active,
            image_url,
            external_image_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(has_image: bool, image_url: Option<&str>) -> ProductModel {
        ProductModel {
            product_id: 7,
            name: "Bracket".into(),
            description: None,
            price_cents: 4990,
            is_active: true,
            has_image,
            image_url: image_url.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn stored_bytes_win_over_external_url() {
        let url = resolve_image_url(&product(true, Some("https://cdn.example/x.png")));
        assert_eq!(url, "/media/product/7");
    }

    #[test]
    fn external_url_used_when_no_bytes() {
        let url = resolve_image_url(&product(false, Some("https://cdn.example/x.png")));
        assert_eq!(url, "https://cdn.example/x.png");
    }

    #[test]
    fn placeholder_when_neither() {
        assert_eq!(resolve_image_url(&product(false, None)), PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image_url(&product(false, Some(""))), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn admin_projection_keeps_raw_external_url() {
        // Stored bytes win for display, but the form still needs the raw
        // URL so an edit round-trip does not drop it.
        let resp = ProductAdminResponse::from(product(true, Some("https://cdn.example/x.png")));
        assert_eq!(resp.image_url, "/media/product/7");
        assert_eq!(
            resp.external_image_url.as_deref(),
            Some("https://cdn.example/x.png")
        );
    }

    #[test]
    fn price_is_two_decimal() {
        let resp = ProductResponse::from(product(false, None));
        assert_eq!(resp.price, "49.90");
    }
}
