#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.code_empty")]
    CodeEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.stock_negative")]
    StockNegative,
    #[error("product.code_duplicated")]
    CodeDuplicated,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
