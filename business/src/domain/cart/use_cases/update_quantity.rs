use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;

pub struct UpdateQuantityParams {
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<ResolvedCart, CartError>;
}
