use crate::{
    domain::{
        requests::{CreateProductRequest, StoreImageRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductAdminResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image: Option<StoreImageRequest>,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError>;

    async fn update(
        &self,
        req: &UpdateProductRequest,
        image: Option<StoreImageRequest>,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError>;

    async fn trash(&self, product_id: i32) -> Result<ApiResponse<ProductAdminResponse>, ServiceError>;

    async fn restore(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError>;

    async fn delete_permanent(&self, product_id: i32) -> Result<ApiResponse<bool>, ServiceError>;
}
