mod admin;
mod api;
mod media;
mod storefront;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use shared::{config::Config, utils::shutdown_signal};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::admin_routes;
pub use self::api::api_routes;
pub use self::media::media_routes;
pub use self::storefront::storefront_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::get_active_products,
        api::get_active_products_window,
        api::get_active_product,
        api::whatsapp_checkout,
        media::get_product_image,
    ),
    tags(
        (name = "Product", description = "Catalog endpoints"),
        (name = "Cart", description = "WhatsApp checkout"),
        (name = "Media", description = "Product image delivery"),
    )
)]
struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(api_routes(&app_state))
            .merge(media_routes(&app_state));

        let (api_router, api) = api_router.split_for_parts();

        let app = Router::new()
            .merge(storefront_routes(&app_state))
            .merge(admin_routes(&app_state))
            .merge(api_router)
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
            .nest_service("/static", ServeDir::new("static"))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&app_state.config))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(8 * 1024 * 1024));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/docs");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
