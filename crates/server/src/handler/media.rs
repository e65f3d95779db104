use crate::state::AppState;
use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use shared::{
    abstract_trait::product::service::DynProductQueryService, errors::HttpError,
    utils::etag_matches,
};
use utoipa_axum::router::OpenApiRouter;

/// Stored images are content-addressed, so the ETag is the SHA-256 of the
/// bytes and a match means the client copy is current by construction.
#[utoipa::path(
    get,
    path = "/media/product/{id}",
    tag = "Media",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Image bytes with a strong content-hash ETag"),
        (status = 304, description = "Client cache is current"),
        (status = 404, description = "No stored image for this product"),
        (status = 500, description = "Stored image failed integrity checks")
    )
)]
pub async fn get_product_image(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let image = service.find_image(id).await?;
    let etag = format!("\"{}\"", image.etag);

    let cache_is_current = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| etag_matches(value, &image.etag));

    if cache_is_current {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (header::ETAG, etag),
            (header::CONTENT_TYPE, image.mime.clone()),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        image.bytes,
    )
        .into_response())
}

pub fn media_routes(app_state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/media/product/{id}", get(get_product_image))
        .layer(Extension(app_state.di_container.product_query.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{Router, body::Body, http::Request, routing::get};
    use shared::{
        abstract_trait::product::service::{DynProductQueryService, ProductQueryServiceTrait},
        domain::{
            requests::{FindAllProducts, FindProductsWindow},
            responses::{
                ApiResponse, ApiResponsePagination, MediaImageResponse, ProductAdminResponse,
                ProductResponse,
            },
        },
        errors::{RepositoryError, ServiceError},
        utils::sha256_hex,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedImageService {
        image: Option<MediaImageResponse>,
    }

    #[async_trait]
    impl ProductQueryServiceTrait for FixedImageService {
        async fn find_all(
            &self,
            _req: &FindAllProducts,
        ) -> Result<ApiResponsePagination<Vec<ProductAdminResponse>>, ServiceError> {
            unimplemented!()
        }

        async fn find_active(
            &self,
            _req: &FindAllProducts,
        ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
            unimplemented!()
        }

        async fn find_active_window(
            &self,
            _req: &FindProductsWindow,
        ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            _id: i32,
        ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
            unimplemented!()
        }

        async fn find_active_by_id(
            &self,
            _id: i32,
        ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
            unimplemented!()
        }

        async fn find_image(&self, _id: i32) -> Result<MediaImageResponse, ServiceError> {
            self.image
                .clone()
                .ok_or(ServiceError::Repo(RepositoryError::NotFound))
        }
    }

    fn app(image: Option<MediaImageResponse>) -> Router {
        let service = Arc::new(FixedImageService { image }) as DynProductQueryService;

        Router::new()
            .route("/media/product/{id}", get(get_product_image))
            .layer(Extension(service))
    }

    fn png_image() -> MediaImageResponse {
        let bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        MediaImageResponse {
            etag: sha256_hex(&bytes),
            mime: "image/png".to_string(),
            bytes,
        }
    }

    #[tokio::test]
    async fn serves_bytes_with_quoted_etag() {
        let image = png_image();
        let expected_etag = format!("\"{}\"", image.etag);
        let expected_bytes = image.bytes.clone();

        let resp = app(Some(image))
            .oneshot(
                Request::builder()
                    .uri("/media/product/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::ETAG).unwrap(), &expected_etag);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), expected_bytes.as_slice());
    }

    #[tokio::test]
    async fn matching_if_none_match_returns_not_modified() {
        let image = png_image();
        let etag = image.etag.clone();

        let resp = app(Some(image))
            .oneshot(
                Request::builder()
                    .uri("/media/product/1")
                    .header(header::IF_NONE_MATCH, format!("\"{etag}\""))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn missing_image_is_not_found() {
        let resp = app(None)
            .oneshot(
                Request::builder()
                    .uri("/media/product/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
