use crate::{
    domain::requests::{CreateProductRequest, StoreImageRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError>;

    /// Persist bytes, MIME and content hash as one atomic update.
    async fn set_image(
        &self,
        product_id: i32,
        image: &StoreImageRequest,
    ) -> Result<(), RepositoryError>;

    /// Soft delete: flip the active flag, keep the row.
    async fn trash(&self, product_id: i32) -> Result<Product, RepositoryError>;

    async fn restore(&self, product_id: i32) -> Result<Product, RepositoryError>;

    /// Hard delete: remove the row entirely.
    async fn delete_permanent(&self, product_id: i32) -> Result<(), RepositoryError>;
}
