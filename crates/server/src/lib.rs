pub mod di;
pub mod handler;
pub mod middleware;
pub mod state;
pub mod view;
