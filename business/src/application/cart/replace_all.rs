use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, ResolvedCart};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::replace_all::{ReplaceAllParams, ReplaceAllUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

use super::populate::resolve_cart;

pub struct ReplaceAllUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceAllUseCase for ReplaceAllUseCaseImpl {
    async fn execute(&self, params: ReplaceAllParams) -> Result<ResolvedCart, CartError> {
        self.logger.info(&format!(
            "Replacing {} line items in cart {}",
            params.items.len(),
            params.cart_id
        ));

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        // Validate every reference before touching the cart: one missing
        // product aborts the whole replace and leaves the stored cart as-is.
        let mut items = Vec::with_capacity(params.items.len());
        for incoming in params.items {
            self.product_repository
                .get_by_id(incoming.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ProductNotFound,
                    other => CartError::Repository(other),
                })?;
            items.push(CartItem::sanitized(incoming.product_id, incoming.quantity));
        }

        cart.replace_items(items);
        self.repository.save(&cart).await?;

        resolve_cart(cart, self.product_repository.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::populate::test_support::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::cart::use_cases::replace_all::ReplaceItem;
    use uuid::Uuid;

    fn use_case(
        mock_carts: MockCartRepo,
        mock_products: MockProductRepo,
    ) -> ReplaceAllUseCaseImpl {
        ReplaceAllUseCaseImpl {
            repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_replace_items_and_sanitize_quantities() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new();
            cart.id = id;
            Ok(cart)
        });
        mock_carts
            .expect_save()
            .withf(|cart| {
                cart.items.len() == 2
                    && cart.items[0].quantity == 4
                    && cart.items[1].quantity == 1
            })
            .returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));

        let cart = use_case(mock_carts, mock_products)
            .execute(ReplaceAllParams {
                cart_id: Uuid::new_v4(),
                items: vec![
                    ReplaceItem {
                        product_id: first,
                        quantity: Some(4),
                    },
                    ReplaceItem {
                        product_id: second,
                        quantity: Some(-2),
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[1].quantity, 1);
    }

    #[tokio::test]
    async fn should_abort_whole_replace_when_one_reference_is_missing() {
        let live = Uuid::new_v4();
        let missing = Uuid::new_v4();
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new();
            cart.id = id;
            Ok(cart)
        });
        // no partial write
        mock_carts.expect_save().never();

        let mut mock_products = MockProductRepo::new();
        mock_products.expect_get_by_id().returning(move |id| {
            if id == missing {
                Err(RepositoryError::NotFound)
            } else {
                Ok(make_product(id))
            }
        });

        let result = use_case(mock_carts, mock_products)
            .execute(ReplaceAllParams {
                cart_id: Uuid::new_v4(),
                items: vec![
                    ReplaceItem {
                        product_id: live,
                        quantity: Some(1),
                    },
                    ReplaceItem {
                        product_id: missing,
                        quantity: Some(2),
                    },
                ],
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_merge_duplicate_product_ids_in_input() {
        let pid = Uuid::new_v4();
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new();
            cart.id = id;
            Ok(cart)
        });
        mock_carts
            .expect_save()
            .withf(|cart| cart.items.len() == 1 && cart.items[0].quantity == 5)
            .returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));

        let cart = use_case(mock_carts, mock_products)
            .execute(ReplaceAllParams {
                cart_id: Uuid::new_v4(),
                items: vec![
                    ReplaceItem {
                        product_id: pid,
                        quantity: Some(2),
                    },
                    ReplaceItem {
                        product_id: pid,
                        quantity: Some(3),
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }
}
