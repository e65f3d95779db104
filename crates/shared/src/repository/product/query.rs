use super::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Product, ProductImage},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_window(
        &self,
        active_only: bool,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let filter = if active_only {
            "WHERE is_active"
        } else {
            ""
        };

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM products {filter}"))
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {:?}", e);
                RepositoryError::from(e)
            })?;

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products {filter} \
             ORDER BY updated_at DESC NULLS LAST, product_id DESC \
             LIMIT $1 OFFSET $2"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .bind(offset.max(0))
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok((products, total))
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Fetching all products | offset: {offset}, limit: {limit}");
        self.fetch_window(false, offset, limit).await
    }

    async fn find_active(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🟢 Fetching active products | offset: {offset}, limit: {limit}");
        self.fetch_window(true, offset, limit).await
    }

    async fn count_active(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count active products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(total)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1");

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql =
            format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1 AND is_active");

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch active product {id}: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_image(&self, id: i32) -> Result<Option<ProductImage>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, ProductImage>(
            "SELECT image_bytes, image_mime, image_sha256 FROM products WHERE product_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch image for product {id}: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
