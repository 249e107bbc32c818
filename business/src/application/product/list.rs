use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase, ProductPage};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        self.logger.debug(&format!(
            "Listing products page {} (limit {})",
            params.page.page, params.page.limit
        ));

        let total = self.repository.count(&params.filter).await?;
        let products = self
            .repository
            .find(
                &params.filter,
                params.sort,
                params.page.skip(),
                params.page.limit,
            )
            .await?;

        Ok(ProductPage { products, total })
    }
}
