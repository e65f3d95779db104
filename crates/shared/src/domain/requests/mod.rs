mod auth;
mod cart;
mod product;

pub use self::auth::LoginRequest;
pub use self::cart::{CartItem, CheckoutRequest};
pub use self::product::{
    CreateProductRequest, FindAllProducts, FindProductsWindow, StoreImageRequest,
    UpdateProductRequest,
};
