use crate::{
    domain::{requests::CheckoutRequest, responses::{ApiResponse, CheckoutResponse}},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

pub trait CartServiceTrait: Send + Sync {
    fn checkout(&self, req: &CheckoutRequest) -> Result<ApiResponse<CheckoutResponse>, ServiceError>;
}
