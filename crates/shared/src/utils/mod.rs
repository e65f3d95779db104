mod checksum;
mod gracefullshutdown;
mod image;
mod logs;
mod money;
mod pagination;

pub use self::checksum::{etag_matches, sha256_hex};
pub use self::gracefullshutdown::shutdown_signal;
pub use self::image::{
    ImageFormat, MAX_IMAGE_BYTES, PLACEHOLDER_IMAGE, media_path, validate_image_upload,
};
pub use self::logs::init_logger;
pub use self::money::{format_cents, parse_price_to_cents};
pub use self::pagination::{build_pagination_items, clamp_page, total_pages};
