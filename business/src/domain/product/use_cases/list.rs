use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::{PageRequest, PriceOrder, ProductFilter};
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub filter: ProductFilter,
    pub sort: Option<PriceOrder>,
    pub page: PageRequest,
}

/// One bounded page of the catalog plus the total match count the
/// pagination metadata is derived from.
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
