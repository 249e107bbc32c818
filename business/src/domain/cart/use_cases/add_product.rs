use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;

pub struct AddProductParams {
    pub cart_id: Uuid,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Result<ResolvedCart, CartError>;
}
