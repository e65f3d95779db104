use crate::{
    state::AppState,
    view::{HtmlTemplate, IndexTemplate, ProductTemplate, pager_items},
};
use axum::{
    Router,
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use shared::{
    abstract_trait::product::service::DynProductQueryService, config::Config,
    domain::requests::FindAllProducts, errors::HttpError,
};
use std::sync::Arc;
use tracing::info;

pub const HOME_PAGE_SIZE: i32 = 10;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i32,
}

fn default_page() -> i32 {
    1
}

pub async fn home_page(
    Extension(service): Extension<DynProductQueryService>,
    Extension(config): Extension<Arc<Config>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let req = FindAllProducts {
        page: query.page,
        page_size: HOME_PAGE_SIZE,
    };

    let response = service.find_active(&req).await?;

    info!(
        "🛒 Rendering storefront page {} of {}",
        response.pagination.page, response.pagination.total_pages
    );

    let pager = pager_items(response.pagination.page, response.pagination.total_pages);

    Ok(HtmlTemplate(IndexTemplate {
        products: response.data,
        pagination: response.pagination,
        pager,
        whatsapp_number: config.whatsapp_number.clone(),
    }))
}

pub async fn product_page(
    Extension(service): Extension<DynProductQueryService>,
    Extension(config): Extension<Arc<Config>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active_by_id(id).await?;

    Ok(HtmlTemplate(ProductTemplate {
        product: response.data,
        whatsapp_number: config.whatsapp_number.clone(),
    }))
}

pub fn storefront_routes(app_state: &AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/product/{id}", get(product_page))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.config.clone()))
}
