mod product;

pub use self::product::{ProductCommandRepository, ProductQueryRepository};
