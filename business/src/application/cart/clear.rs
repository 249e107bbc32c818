use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<ResolvedCart, CartError> {
        self.logger
            .info(&format!("Clearing cart: {}", params.cart_id));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        cart.clear();
        self.repository.save(&cart).await?;

        // The cart itself persists, only the line items are gone.
        Ok(ResolvedCart {
            id: cart.id,
            items: Vec::new(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        })
    }
}
