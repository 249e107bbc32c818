use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;

/// One incoming line item. Quantities below 1 (or absent) are coerced to 1
/// rather than rejecting the request.
pub struct ReplaceItem {
    pub product_id: Uuid,
    pub quantity: Option<i64>,
}

pub struct ReplaceAllParams {
    pub cart_id: Uuid,
    pub items: Vec<ReplaceItem>,
}

#[async_trait]
pub trait ReplaceAllUseCase: Send + Sync {
    async fn execute(&self, params: ReplaceAllParams) -> Result<ResolvedCart, CartError>;
}
