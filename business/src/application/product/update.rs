use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Merge semantics: only supplied fields change.
        let title = params.title.unwrap_or(existing.title);
        let description = params.description.or(existing.description);
        let price = params.price.unwrap_or(existing.price);
        let thumbnail = params.thumbnail.or(existing.thumbnail);
        let code = params.code.unwrap_or(existing.code);
        let stock = params.stock.unwrap_or(existing.stock);
        let category = params.category.unwrap_or(existing.category);
        let status = params.status.unwrap_or(existing.status);

        Product::validate(&title, &code, &category, price, stock)?;

        let updated = Product::from_repository(
            existing.id,
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
            category,
            status,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await.map_err(|e| match e {
            RepositoryError::Duplicated => ProductError::CodeDuplicated,
            other => ProductError::Repository(other),
        })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
