use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub code: String,
    pub stock: i32,
    pub category: String,
    pub status: Option<bool>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
