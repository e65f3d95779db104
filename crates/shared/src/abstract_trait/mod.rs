mod cart;
pub mod product;
mod session;

pub use self::cart::{CartServiceTrait, DynCartService};
pub use self::session::{DynSessionToken, SessionTokenTrait};
