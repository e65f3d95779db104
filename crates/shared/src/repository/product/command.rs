use super::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, StoreImageRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn set_active(&self, product_id: i32, active: bool) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE products SET is_active = $2, updated_at = current_timestamp \
             WHERE product_id = $1 RETURNING {PRODUCT_COLUMNS}"
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .bind(active)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to toggle product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "INSERT INTO products (name, description, price_cents, image_url, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, TRUE, current_timestamp, current_timestamp) \
             RETURNING {PRODUCT_COLUMNS}"
        );

        let result = sqlx::query_as::<_, Product>(&sql)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.price_cents)
            .bind(&req.image_url)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", req.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", result.product_id, result.name);
        Ok(result)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let id = req.id.ok_or(RepositoryError::NotFound)?;
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE products \
             SET name = $2, description = $3, price_cents = $4, image_url = $5, \
                 is_active = $6, updated_at = current_timestamp \
             WHERE product_id = $1 RETURNING {PRODUCT_COLUMNS}"
        );

        let result = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.price_cents)
            .bind(&req.image_url)
            .bind(req.is_active)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", result.product_id);
        Ok(result)
    }

    async fn set_image(
        &self,
        product_id: i32,
        image: &StoreImageRequest,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            "UPDATE products \
             SET image_bytes = $2, image_mime = $3, image_sha256 = $4, \
                 updated_at = current_timestamp \
             WHERE product_id = $1",
        )
        .bind(product_id)
        .bind(&image.bytes)
        .bind(&image.mime)
        .bind(&image.sha256)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to store image for product {product_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!(
            "🖼️ Stored image for product ID {product_id} ({} bytes, {})",
            image.bytes.len(),
            image.mime
        );
        Ok(())
    }

    async fn trash(&self, product_id: i32) -> Result<Product, RepositoryError> {
        let result = self.set_active(product_id, false).await?;
        info!("🗑️ Trashed product ID {product_id}");
        Ok(result)
    }

    async fn restore(&self, product_id: i32) -> Result<Product, RepositoryError> {
        let result = self.set_active(product_id, true).await?;
        info!("♻️ Restored product ID {product_id}");
        Ok(result)
    }

    async fn delete_permanent(&self, product_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {product_id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Permanently deleted product ID {product_id}");
        Ok(())
    }
}
