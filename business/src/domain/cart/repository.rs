use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn create(&self) -> Result<Cart, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError>;
    /// Persists the cart, replacing its stored line-item list in a single
    /// transaction.
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
