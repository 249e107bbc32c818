use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

use super::populate::resolve_cart;

pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<ResolvedCart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart {}",
            params.product_id, params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        if !cart.remove(params.product_id) {
            return Err(CartError::LineItemNotFound);
        }

        self.repository.save(&cart).await?;

        resolve_cart(cart, self.product_repository.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::populate::test_support::*;
    use crate::domain::cart::model::{Cart, CartItem};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_remove_line_item() {
        let product_id = Uuid::new_v4();
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(move |id| {
            let mut cart = Cart::new();
            cart.id = id;
            cart.items = vec![CartItem {
                product_id,
                quantity: 2,
            }];
            Ok(cart)
        });
        mock_carts
            .expect_save()
            .withf(|cart| cart.items.is_empty())
            .returning(|_| Ok(()));

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveProductParams {
                cart_id: Uuid::new_v4(),
                product_id,
            })
            .await
            .unwrap();

        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn should_report_missing_line_item_without_writing() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new();
            cart.id = id;
            Ok(cart)
        });
        mock_carts.expect_save().never();

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::LineItemNotFound));
    }

    #[tokio::test]
    async fn should_report_missing_cart() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_carts),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
