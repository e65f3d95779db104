mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

/// Column list shared by every query that materializes a `Product`. The
/// blob column itself is never selected here; only its presence is.
pub(crate) const PRODUCT_COLUMNS: &str = "\
    product_id, name, description, price_cents, is_active, \
    (image_bytes IS NOT NULL) AS has_image, image_url, created_at, updated_at";
