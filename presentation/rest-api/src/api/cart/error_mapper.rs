use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.not_found"),
            // Missing product and missing line item deliberately share one
            // outward message; existing clients rely on the coalesced shape.
            CartError::ProductNotFound | CartError::LineItemNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.or_product_not_found",
            ),
            CartError::QuantityInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.quantity_invalid",
            ),
            CartError::Repository(_) => (
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
