use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::listing::{PriceOrder, ProductFilter};
use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: Option<PriceOrder>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Upsert. Fails with [`RepositoryError::Duplicated`] when another
    /// product already holds the same `code`.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
