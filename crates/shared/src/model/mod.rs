mod product;

pub use self::product::{Product, ProductImage};
