use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notifier::CatalogNotifier;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub notifier: Arc<dyn CatalogNotifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product with code: {}", params.code));

        let product = Product::new(NewProductProps {
            title: params.title,
            description: params.description,
            price: params.price,
            thumbnail: params.thumbnail,
            code: params.code,
            stock: params.stock,
            category: params.category,
            status: params.status,
        })?;

        self.repository.save(&product).await.map_err(|e| match e {
            RepositoryError::Duplicated => ProductError::CodeDuplicated,
            other => ProductError::Repository(other),
        })?;

        // Fan-out is fire-and-forget: a failed snapshot read only skips the
        // broadcast, the create itself already succeeded.
        match self.repository.get_all().await {
            Ok(products) => self.notifier.publish(products),
            Err(e) => self
                .logger
                .warn(&format!("Skipping catalog broadcast after create: {}", e)),
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::listing::{PriceOrder, ProductFilter};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
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
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Notify {}

        impl CatalogNotifier for Notify {
            fn publish(&self, products: Vec<Product>);
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> CreateProductParams {
        CreateProductParams {
            title: "A".to_string(),
            description: None,
            price: 10.0,
            thumbnail: None,
            code: "C1".to_string(),
            stock: 5,
            category: "x".to_string(),
            status: None,
        }
    }

    #[tokio::test]
    async fn should_create_product_and_broadcast_catalog() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let mut mock_notifier = MockNotify::new();
        mock_notifier.expect_publish().times(1).returning(|_| ());

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: Arc::new(mock_notifier),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.title, "A");
        assert_eq!(product.code, "C1");
        assert!(product.status);
    }

    #[tokio::test]
    async fn should_map_duplicated_code_to_domain_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let mut mock_notifier = MockNotify::new();
        mock_notifier.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: Arc::new(mock_notifier),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::CodeDuplicated
        ));
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_before_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let mut mock_notifier = MockNotify::new();
        mock_notifier.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: Arc::new(mock_notifier),
            logger: mock_logger(),
        };

        let mut bad = params();
        bad.price = -1.0;
        let result = use_case.execute(bad).await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }

    #[tokio::test]
    async fn should_still_succeed_when_broadcast_snapshot_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let mut mock_notifier = MockNotify::new();
        mock_notifier.expect_publish().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: Arc::new(mock_notifier),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
    }
}
