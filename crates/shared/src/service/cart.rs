use crate::{
    abstract_trait::CartServiceTrait,
    domain::{
        requests::CheckoutRequest,
        responses::{ApiResponse, CheckoutResponse},
    },
    errors::ServiceError,
    service::validation_messages,
    utils::format_cents,
};
use tracing::info;
use validator::Validate;

/// Turns a cart into a pre-filled WhatsApp conversation link with an order
/// summary and the computed total.
#[derive(Debug, Clone)]
pub struct CartService {
    whatsapp_number: String,
}

impl CartService {
    pub fn new(whatsapp_number: &str) -> Self {
        Self {
            whatsapp_number: whatsapp_number.to_string(),
        }
    }
}

fn cart_too_large() -> ServiceError {
    ServiceError::Validation(vec!["Cart total is too large".to_string()])
}

impl CartServiceTrait for CartService {
    fn checkout(
        &self,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        if req.items.is_empty() {
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Empty cart, plain contact link".to_string(),
                data: CheckoutResponse {
                    url: format!("https://wa.me/{}", self.whatsapp_number),
                    total: format_cents(0),
                },
            });
        }

        let mut total_cents: i64 = 0;
        let mut text =
            String::from("Hello! I'm interested in the following items from the catalog:\n\n");

        // Prices and quantities are individually bounded below but their
        // product is not, so the totals use checked arithmetic.
        for item in &req.items {
            let subtotal = item
                .unit_price_cents
                .checked_mul(item.quantity as i64)
                .ok_or_else(cart_too_large)?;
            total_cents = total_cents.checked_add(subtotal).ok_or_else(cart_too_large)?;
            text.push_str(&format!(
                "- {}x {} @ {}/un = {}\n",
                item.quantity,
                item.name,
                format_cents(item.unit_price_cents),
                format_cents(subtotal),
            ));
        }

        let total = format_cents(total_cents);
        text.push_str(&format!(
            "\nEstimated total: {total}\n\nCould you quote shipping and delivery time?\nThank you!"
        ));

        info!("🛒 Checkout link built for {} item(s)", req.items.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Checkout link generated".to_string(),
            data: CheckoutResponse {
                url: format!(
                    "https://wa.me/{}?text={}",
                    self.whatsapp_number,
                    urlencoding::encode(&text)
                ),
                total,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::CartItem;

    fn service() -> CartService {
        CartService::new("5511999990000")
    }

    fn cart(items: Vec<CartItem>) -> CheckoutRequest {
        CheckoutRequest { items }
    }

    #[test]
    fn empty_cart_yields_plain_link() {
        let resp = service().checkout(&cart(vec![])).unwrap();
        assert_eq!(resp.data.url, "https://wa.me/5511999990000");
        assert_eq!(resp.data.total, "0.00");
    }

    #[test]
    fn total_sums_quantity_times_unit_price() {
        let resp = service()
            .checkout(&cart(vec![
                CartItem {
                    name: "Bracket".into(),
                    quantity: 2,
                    unit_price_cents: 4990,
                },
                CartItem {
                    name: "Screw kit".into(),
                    quantity: 1,
                    unit_price_cents: 990,
                },
            ]))
            .unwrap();

        assert_eq!(resp.data.total, "108.70");
    }

    #[test]
    fn summary_is_url_encoded() {
        let resp = service()
            .checkout(&cart(vec![CartItem {
                name: "Corner shelf".into(),
                quantity: 1,
                unit_price_cents: 1000,
            }]))
            .unwrap();

        assert!(resp.data.url.starts_with("https://wa.me/5511999990000?text="));
        // No raw spaces or newlines survive in the query string.
        let query = resp.data.url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' ') && !query.contains('\n'));
        assert!(query.contains("Corner%20shelf"));
    }

    #[test]
    fn overflowing_total_rejected() {
        // Each field passes validation on its own; only the product of
        // quantity and unit price exceeds i64.
        let err = service()
            .checkout(&cart(vec![CartItem {
                name: "Bulk order".into(),
                quantity: 3,
                unit_price_cents: i64::MAX / 2,
            }]))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn overflowing_sum_of_subtotals_rejected() {
        let item = CartItem {
            name: "Bracket".into(),
            quantity: 1,
            unit_price_cents: i64::MAX - 1,
        };
        let err = service()
            .checkout(&cart(vec![item.clone(), item]))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn invalid_item_rejected() {
        let err = service()
            .checkout(&cart(vec![CartItem {
                name: "".into(),
                quantity: 0,
                unit_price_cents: -5,
            }]))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
