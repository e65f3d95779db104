use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CartItem {
    #[validate(length(min = 1, message = "Item name is required"))]
    #[schema(example = "Corner shelf bracket")]
    pub name: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: u32,

    #[validate(range(min = 0, message = "Unit price cannot be negative"))]
    #[schema(example = 4990)]
    pub unit_price_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    #[validate(nested)]
    pub items: Vec<CartItem>,
}
