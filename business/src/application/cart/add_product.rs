use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ResolvedCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

use super::populate::resolve_cart;

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<ResolvedCart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart {}",
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

        // The referenced product must exist at the time of the add.
        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        cart.add(params.product_id);
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

    fn use_case(
        mock_carts: MockCartRepo,
        mock_products: MockProductRepo,
    ) -> AddProductUseCaseImpl {
        AddProductUseCaseImpl {
            repository: Arc::new(mock_carts),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_append_new_line_item_with_quantity_one() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new();
            cart.id = id;
            Ok(cart)
        });
        mock_carts
            .expect_save()
            .withf(|cart| cart.items.len() == 1 && cart.items[0].quantity == 1)
            .returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));

        let cart = use_case(mock_carts, mock_products)
            .execute(AddProductParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[tokio::test]
    async fn should_increment_existing_line_item_instead_of_duplicating() {
        let product_id = Uuid::new_v4();
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(move |id| {
            let mut cart = Cart::new();
            cart.id = id;
            cart.items = vec![CartItem {
                product_id,
                quantity: 1,
            }];
            Ok(cart)
        });
        mock_carts
            .expect_save()
            .withf(|cart| cart.items.len() == 1 && cart.items[0].quantity == 2)
            .returning(|_| Ok(()));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));

        let cart = use_case(mock_carts, mock_products)
            .execute(AddProductParams {
                cart_id: Uuid::new_v4(),
                product_id,
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_cart() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_carts.expect_save().never();

        let result = use_case(mock_carts, MockProductRepo::new())
            .execute(AddProductParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_return_product_not_found_without_writing() {
        let mut mock_carts = MockCartRepo::new();
        mock_carts.expect_get_by_id().returning(|id| {
            let mut cart = Cart::new();
            cart.id = id;
            Ok(cart)
        });
        mock_carts.expect_save().never();

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(mock_carts, mock_products)
            .execute(AddProductParams {
                cart_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }
}
