use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::{FindAllProducts, FindProductsWindow},
        responses::{
            ApiResponse, ApiResponsePagination, MediaImageResponse, Pagination,
            ProductAdminResponse, ProductResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    utils::{ImageFormat, clamp_page, sha256_hex, total_pages},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductAdminResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}",
            req.page, req.page_size
        );

        let page_size = req.page_size.max(1);
        let mut page = req.page.max(1);
        // Widen before multiplying; a page near i32::MAX must not overflow.
        let offset = (page as i64 - 1) * page_size as i64;

        let (mut products, total) = self.query.find_all(offset, page_size as i64).await?;

        // Out-of-range page: clamp to the last valid page and refetch.
        let pages = total_pages(total, page_size);
        if page > pages {
            page = pages;
            if total > 0 {
                let offset = (page as i64 - 1) * page_size as i64;
                (products, _) = self.query.find_all(offset, page_size as i64).await?;
            }
        }

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data: products.into_iter().map(ProductAdminResponse::from).collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items: total as i32,
                total_pages: pages,
            },
        })
    }

    async fn find_active(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🟢 Finding active products | Page: {}, Size: {}",
            req.page, req.page_size
        );

        let page_size = req.page_size.max(1);
        let total = self.query.count_active().await?;
        let pages = total_pages(total, page_size);
        let page = clamp_page(req.page, pages);
        let offset = (page as i64 - 1) * page_size as i64;

        let (products, _) = self.query.find_active(offset, page_size as i64).await?;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Active products fetched successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items: total as i32,
                total_pages: pages,
            },
        })
    }

    async fn find_active_window(
        &self,
        req: &FindProductsWindow,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let limit = req.limit.clamp(1, 100);
        let (products, _) = self.query.find_active(req.offset.max(0), limit).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Active products fetched successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductAdminResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductAdminResponse::from(product),
        })
    }

    async fn find_active_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_active_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn find_image(&self, id: i32) -> Result<MediaImageResponse, ServiceError> {
        let image = self
            .query
            .find_image(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let bytes = match image.image_bytes {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(ServiceError::Repo(RepositoryError::NotFound)),
        };

        // Stored bytes must round-trip byte-for-byte. A digest or signature
        // mismatch means the blob was corrupted somewhere and is a hard
        // failure, never a silent fallback.
        let computed = sha256_hex(&bytes);
        if let Some(stored) = image.image_sha256.as_deref() {
            if stored != computed {
                error!(
                    "❌ Image digest mismatch for product {id}: stored {stored}, computed {computed}"
                );
                return Err(ServiceError::CorruptImage(format!(
                    "digest mismatch for product {id}"
                )));
            }
        } else {
            warn!("⚠️ Product {id} image has no stored digest, serving computed one");
        }

        if ImageFormat::sniff(&bytes).is_none() {
            error!("❌ Stored image for product {id} has an unrecognized byte signature");
            return Err(ServiceError::CorruptImage(format!(
                "unrecognized byte signature for product {id}"
            )));
        }

        Ok(MediaImageResponse {
            mime: image
                .image_mime
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            etag: computed,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::ProductQueryRepositoryTrait,
        model::{Product, ProductImage},
    };
    use std::sync::Arc;

    struct EmptyStore;

    #[async_trait]
    impl ProductQueryRepositoryTrait for EmptyStore {
        async fn find_all(
            &self,
            _offset: i64,
            _limit: i64,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            Ok((vec![], 0))
        }

        async fn find_active(
            &self,
            _offset: i64,
            _limit: i64,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            Ok((vec![], 0))
        }

        async fn count_active(&self) -> Result<i64, RepositoryError> {
            Ok(0)
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(None)
        }

        async fn find_active_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(None)
        }

        async fn find_image(&self, _id: i32) -> Result<Option<ProductImage>, RepositoryError> {
            Ok(None)
        }
    }

    fn service() -> ProductQueryService {
        ProductQueryService::new(Arc::new(EmptyStore))
    }

    #[tokio::test]
    async fn huge_page_number_does_not_overflow() {
        let resp = service()
            .find_all(&FindAllProducts {
                page: i32::MAX,
                page_size: 10,
            })
            .await
            .unwrap();

        assert_eq!(resp.pagination.page, 1);
        assert_eq!(resp.pagination.total_pages, 1);
        assert!(resp.data.is_empty());
    }

    #[tokio::test]
    async fn huge_page_clamped_on_active_listing_too() {
        let resp = service()
            .find_active(&FindAllProducts {
                page: i32::MAX,
                page_size: i32::MAX,
            })
            .await
            .unwrap();

        assert_eq!(resp.pagination.page, 1);
    }
}
