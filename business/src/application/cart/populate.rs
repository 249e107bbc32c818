use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ResolvedCart, ResolvedCartItem};
use crate::domain::errors::RepositoryError;
use crate::domain::product::repository::ProductRepository;

/// Resolves every line item's product reference against the current catalog
/// ("populate"). Reads are always fresh, never cached, so price and stock
/// changes show up immediately in cart views. A reference to a product that
/// no longer exists resolves to `None` instead of failing the read.
pub async fn resolve_cart(
    cart: Cart,
    products: &dyn ProductRepository,
) -> Result<ResolvedCart, CartError> {
    let mut items = Vec::with_capacity(cart.items.len());
    for item in cart.items {
        let product = match products.get_by_id(item.product_id).await {
            Ok(product) => Some(product),
            Err(RepositoryError::NotFound) => None,
            Err(other) => return Err(CartError::Repository(other)),
        };
        items.push(ResolvedCartItem {
            product_id: item.product_id,
            product,
            quantity: item.quantity,
        });
    }
    Ok(ResolvedCart {
        id: cart.id,
        items,
        created_at: cart.created_at,
        updated_at: cart.updated_at,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::cart::model::CartItem;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_resolve_existing_references_and_null_missing_ones() {
        let live = Uuid::new_v4();
        let deleted = Uuid::new_v4();
        let mut cart = Cart::new();
        cart.items = vec![
            CartItem {
                product_id: live,
                quantity: 2,
            },
            CartItem {
                product_id: deleted,
                quantity: 1,
            },
        ];

        let mut mock_products = MockProductRepo::new();
        mock_products.expect_get_by_id().returning(move |id| {
            if id == deleted {
                Err(RepositoryError::NotFound)
            } else {
                Ok(make_product(id))
            }
        });

        let resolved = resolve_cart(cart, &mock_products).await.unwrap();

        assert_eq!(resolved.items.len(), 2);
        assert!(resolved.items[0].product.is_some());
        assert_eq!(resolved.items[0].quantity, 2);
        assert!(resolved.items[1].product.is_none());
        assert_eq!(resolved.items[1].product_id, deleted);
    }

    #[tokio::test]
    async fn should_propagate_unexpected_store_failures() {
        let mut cart = Cart::new();
        cart.items = vec![CartItem {
            product_id: Uuid::new_v4(),
            quantity: 1,
        }];

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = resolve_cart(cart, &mock_products).await;

        assert!(matches!(result, Err(CartError::Repository(_))));
    }
}
