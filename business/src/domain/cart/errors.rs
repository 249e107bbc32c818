#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    /// A referenced product does not exist in the catalog.
    #[error("cart.product_not_found")]
    ProductNotFound,
    /// The cart exists but holds no line item for the product.
    #[error("cart.line_item_not_found")]
    LineItemNotFound,
    #[error("cart.quantity_invalid")]
    QuantityInvalid,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
