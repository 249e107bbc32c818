use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{UpdateQuantityParams, UpdateQuantityUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

use super::populate::resolve_cart;

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<ResolvedCart, CartError> {
        self.logger.info(&format!(
            "Setting quantity {} for product {} in cart {}",
            params.quantity, params.product_id, params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        // set_quantity clamps values below 1 so no zero quantity can ever be
        // persisted, whichever caller reaches this path.
        if !cart.set_quantity(params.product_id, params.quantity) {
            return Err(CartError::LineItemNotFound);
        }

        self.repository.save(&cart).await?;

        resolve_cart(cart, self.product_repository.as_ref()).await
    }
}
