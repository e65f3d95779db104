use crate::{
    domain::{
        requests::{FindAllProducts, FindProductsWindow},
        responses::{
            ApiResponse, ApiResponsePagination, MediaImageResponse, ProductAdminResponse,
            ProductResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    /// Every product, trashed ones included (admin listing).
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductAdminResponse>>, ServiceError>;

    /// Active products, page/page_size addressing with page clamping.
    async fn find_active(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;

    /// Active products, offset/limit addressing.
    async fn find_active_window(
        &self,
        req: &FindProductsWindow,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductAdminResponse>, ServiceError>;

    async fn find_active_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    /// Stored image bytes with integrity verified against the content hash.
    async fn find_image(&self, id: i32) -> Result<MediaImageResponse, ServiceError>;
}
