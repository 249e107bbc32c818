use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::CreateCartUseCase;
use crate::domain::logger::Logger;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self) -> Result<ResolvedCart, CartError> {
        let cart = self.repository.create().await?;
        self.logger.info(&format!("Cart created: {}", cart.id));

        // A fresh cart has nothing to resolve.
        Ok(ResolvedCart {
            id: cart.id,
            items: Vec::new(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::populate::test_support::*;
    use crate::domain::cart::model::Cart;

    #[tokio::test]
    async fn should_create_empty_cart() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_create().returning(|| Ok(Cart::new()));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(mock_carts),
            logger: mock_logger(),
        };

        let cart = use_case.execute().await.unwrap();

        assert!(cart.items.is_empty());
    }
}
