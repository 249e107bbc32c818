use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::listing::PageMeta;
use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product title (cannot be empty)
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price, must be >= 0
    pub price: f64,
    /// Image reference
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    /// Unique product code
    pub code: String,
    /// Units in stock, must be >= 0
    pub stock: i32,
    /// Category (cannot be empty)
    pub category: String,
    /// Availability flag, defaults to true
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<bool>,
}

/// Partial update: absent fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub code: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    pub code: String,
    pub stock: i32,
    pub category: String,
    /// Availability flag
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title,
            description: product.description,
            price: product.price,
            thumbnail: product.thumbnail,
            code: product.code,
            stock: product.stock,
            category: product.category,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of the catalog plus navigation metadata and links.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub status: String,
    pub payload: Vec<ProductResponse>,
    pub total_pages: u64,
    #[oai(skip_serializing_if_is_none)]
    pub prev_page: Option<u64>,
    #[oai(skip_serializing_if_is_none)]
    pub next_page: Option<u64>,
    pub page: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    #[oai(skip_serializing_if_is_none)]
    pub prev_link: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub next_link: Option<String>,
}

impl ProductListResponse {
    pub fn new(
        products: Vec<Product>,
        meta: PageMeta,
        prev_link: Option<String>,
        next_link: Option<String>,
    ) -> Self {
        Self {
            status: "success".to_string(),
            payload: products.into_iter().map(|p| p.into()).collect(),
            total_pages: meta.total_pages,
            prev_page: meta.prev_page,
            next_page: meta.next_page,
            page: meta.page,
            has_prev_page: meta.has_prev_page,
            has_next_page: meta.has_next_page,
            prev_link,
            next_link,
        }
    }
}
