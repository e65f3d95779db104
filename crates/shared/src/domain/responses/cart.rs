use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CheckoutResponse {
    /// Pre-filled `wa.me` link with the encoded order summary.
    pub url: String,

    /// Order total, two-decimal precision.
    #[schema(example = "99.80")]
    pub total: String,
}
