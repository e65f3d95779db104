mod api;
mod cart;
mod media;
mod pagination;
mod product;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::cart::CheckoutResponse;
pub use self::media::MediaImageResponse;
pub use self::pagination::Pagination;
pub use self::product::{ProductAdminResponse, ProductResponse, resolve_image_url};
