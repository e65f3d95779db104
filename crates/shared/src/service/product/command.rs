use super::validation_messages;
use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, StoreImageRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductAdminResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image: Option<StoreImageRequest>,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let mut product = self.command.create(req).await?;

        if let Some(image) = image {
            self.command.set_image(product.product_id, &image).await?;
            product.has_image = true;
        }

        info!("✅ Created product '{}'", product.name);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductAdminResponse::from(product),
        })
    }

    async fn update(
        &self,
        req: &UpdateProductRequest,
        image: Option<StoreImageRequest>,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let mut product = self.command.update(req).await?;

        if let Some(image) = image {
            self.command.set_image(product.product_id, &image).await?;
            product.has_image = true;
        }

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductAdminResponse::from(product),
        })
    }

    async fn trash(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        let product = self.command.trash(product_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product moved to trash".to_string(),
            data: ProductAdminResponse::from(product),
        })
    }

    async fn restore(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        let product = self.command.restore(product_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product restored".to_string(),
            data: ProductAdminResponse::from(product),
        })
    }

    async fn delete_permanent(&self, product_id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        self.command.delete_permanent(product_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product permanently deleted".to_string(),
            data: true,
        })
    }
}
