use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row per line item; `position` keeps the item order stable across the
/// delete-and-reinsert writes in [`super::repository::CartRepositoryPostgres`].
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub product_id: Uuid,
    pub quantity: i32,
}

impl CartEntity {
    pub fn into_domain(self, items: Vec<CartItemEntity>) -> Cart {
        Cart::from_repository(
            self.id,
            items
                .into_iter()
                .map(|item| CartItem {
                    product_id: item.product_id,
                    quantity: item.quantity.max(1) as u32,
                })
                .collect(),
            self.created_at,
            self.updated_at,
        )
    }
}
