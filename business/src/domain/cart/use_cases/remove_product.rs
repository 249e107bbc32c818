use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;

pub struct RemoveProductParams {
    pub cart_id: Uuid,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Result<ResolvedCart, CartError>;
}
