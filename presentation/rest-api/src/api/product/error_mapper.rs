use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.title_empty",
            ),
            ProductError::CodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.code_empty",
            ),
            ProductError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_empty",
            ),
            ProductError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative",
            ),
            ProductError::StockNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.stock_negative",
            ),
            // Duplicate codes surface as a 400 creation failure, not a 409;
            // storefront clients key off ValidationError-shaped bodies.
            ProductError::CodeDuplicated => (
                StatusCode::BAD_REQUEST,
                "UniqueConstraintError",
                "product.code_duplicated",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
