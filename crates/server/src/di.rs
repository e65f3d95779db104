use shared::{
    abstract_trait::{
        DynCartService,
        product::service::{DynProductCommandService, DynProductQueryService},
    },
    config::{Config, ConnectionPool},
    repository::{ProductCommandRepository, ProductQueryRepository},
    service::{CartService, ProductCommandService, ProductQueryService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub cart: DynCartService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("cart", &"CartService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let product_query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(pool));

        let product_query =
            Arc::new(ProductQueryService::new(product_query_repo)) as DynProductQueryService;
        let product_command =
            Arc::new(ProductCommandService::new(product_command_repo)) as DynProductCommandService;
        let cart = Arc::new(CartService::new(&config.whatsapp_number)) as DynCartService;

        Self {
            product_query,
            product_command,
            cart,
        }
    }
}
