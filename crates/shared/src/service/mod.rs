mod cart;
mod product;

pub use self::cart::CartService;
pub use self::product::{ProductCommandService, ProductQueryService, validation_messages};
