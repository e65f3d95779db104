use crate::{
    errors::RepositoryError,
    model::{Product, ProductImage},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Read-only projections over the product store. Listing methods take a raw
/// offset/limit window (page arithmetic lives in the service layer) and
/// return the rows plus the matching total count.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;

    async fn find_active(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;

    async fn count_active(&self) -> Result<i64, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn find_image(&self, id: i32) -> Result<Option<ProductImage>, RepositoryError>;
}
