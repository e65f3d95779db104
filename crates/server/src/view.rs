use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use shared::{
    domain::responses::{Pagination, ProductAdminResponse, ProductResponse},
    errors::HttpError,
};

/// Wrap an askama template so render failures surface as a 500 instead of
/// panicking inside the handler.
pub struct HtmlTemplate<T>(pub T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                HttpError::Internal(format!("Template render failed: {err}")).into_response()
            }
        }
    }
}

/// One entry of the compact storefront pager.
pub struct PagerItem {
    pub number: i32,
    pub current: bool,
    pub ellipsis: bool,
}

pub fn pager_items(current: i32, total_pages: i32) -> Vec<PagerItem> {
    shared::utils::build_pagination_items(current, total_pages)
        .into_iter()
        .map(|item| match item {
            Some(number) => PagerItem {
                number,
                current: number == current,
                ellipsis: false,
            },
            None => PagerItem {
                number: 0,
                current: false,
                ellipsis: true,
            },
        })
        .collect()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub products: Vec<ProductResponse>,
    pub pagination: Pagination,
    pub pager: Vec<PagerItem>,
    pub whatsapp_number: String,
}

#[derive(Template)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub product: ProductResponse,
    pub whatsapp_number: String,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub products: Vec<ProductAdminResponse>,
    pub pagination: Pagination,
    pub username: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_carries_stored_external_url() {
        let template = DashboardTemplate {
            products: vec![ProductAdminResponse {
                id: 7,
                name: "Bracket".into(),
                description: None,
                price: "49.90".into(),
                price_cents: 4990,
                is_active: true,
                image_url: "https://cdn.example/x.png".into(),
                external_image_url: Some("https://cdn.example/x.png".into()),
                created_at: None,
                updated_at: None,
            }],
            pagination: Pagination {
                page: 1,
                page_size: 10,
                total_items: 1,
                total_pages: 1,
            },
            username: "admin".into(),
        };

        let html = template.render().unwrap();
        // Saving the edit form resubmits the URL instead of blanking it.
        assert!(html.contains(r#"name="image_url" type="url" value="https://cdn.example/x.png""#));
    }

    #[test]
    fn pager_marks_current_page_and_ellipses() {
        let items = pager_items(5, 10);

        let current: Vec<i32> = items
            .iter()
            .filter(|item| item.current)
            .map(|item| item.number)
            .collect();
        assert_eq!(current, vec![5]);

        assert_eq!(items.iter().filter(|item| item.ellipsis).count(), 2);
        assert_eq!(items.first().unwrap().number, 1);
        assert_eq!(items.last().unwrap().number, 10);
    }
}
