use crate::{middleware::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynCartService, product::service::DynProductQueryService},
    domain::{
        requests::{CheckoutRequest, FindAllProducts, FindProductsWindow},
        responses::{ApiResponse, ApiResponsePagination, CheckoutResponse, ProductResponse},
    },
    errors::HttpError,
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of active products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_active_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/window",
    tag = "Product",
    params(FindProductsWindow),
    responses(
        (status = 200, description = "Offset/limit window over the active products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_active_products_window(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindProductsWindow>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active_window(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_active_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/whatsapp",
    tag = "Cart",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Pre-filled WhatsApp checkout link", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn whatsapp_checkout(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.checkout(&body)?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn api_routes(app_state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_active_products))
        .route("/api/products/window", get(get_active_products_window))
        .route("/api/products/{id}", get(get_active_product))
        .route("/api/whatsapp", post(whatsapp_checkout))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.cart.clone()))
}
