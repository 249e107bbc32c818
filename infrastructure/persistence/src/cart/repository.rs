use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CartEntity, CartItemEntity};

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn create(&self) -> Result<Cart, RepositoryError> {
        let cart = Cart::new();

        sqlx::query("INSERT INTO carts (id, created_at, updated_at) VALUES ($1, $2, $3)")
            .bind(cart.id)
            .bind(cart.created_at)
            .bind(cart.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(cart)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT id, created_at, updated_at FROM carts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        let items = sqlx::query_as::<_, CartItemEntity>(
            "SELECT product_id, quantity FROM cart_items WHERE cart_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain(items))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        // The whole line-item list is rewritten inside one transaction so a
        // concurrent reader never observes a half-replaced cart.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let updated = sqlx::query("UPDATE carts SET updated_at = $2 WHERE id = $1")
            .bind(cart.id)
            .bind(cart.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for (position, item) in cart.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO cart_items (cart_id, product_id, quantity, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(cart.id)
            .bind(item.product_id)
            .bind(item.quantity as i32)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
