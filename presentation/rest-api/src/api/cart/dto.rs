use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{ResolvedCart, ResolvedCartItem};

use crate::api::product::dto::ProductResponse;

/// One resolved line item. `product` is the current catalog record, or null
/// when the referenced product has since been deleted (degraded read).
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub product_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
    pub quantity: u32,
}

impl From<ResolvedCartItem> for CartItemResponse {
    fn from(item: ResolvedCartItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            product: item.product.map(|p| p.into()),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: String,
    pub products: Vec<CartItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResolvedCart> for CartResponse {
    fn from(cart: ResolvedCart) -> Self {
        Self {
            id: cart.id.to_string(),
            products: cart.items.into_iter().map(|i| i.into()).collect(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

/// `{ status, payload }` wrapper every cart endpoint responds with.
#[derive(Debug, Clone, Object)]
pub struct CartEnvelope {
    pub status: String,
    pub payload: CartResponse,
}

impl CartEnvelope {
    pub fn success(cart: ResolvedCart) -> Self {
        Self {
            status: "success".to_string(),
            payload: cart.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReplaceCartItemRequest {
    /// Product identifier
    pub product: String,
    /// Desired quantity; values below 1 (or absent) are coerced to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct ReplaceCartRequest {
    pub products: Vec<ReplaceCartItemRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New quantity, must be >= 1
    pub quantity: i64,
}
