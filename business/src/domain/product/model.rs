use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::ProductError;

/// Catalog product. `code` is unique across the whole catalog and `status`
/// is the availability flag (defaults to true).
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub code: String,
    pub stock: i32,
    pub category: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub code: String,
    pub stock: i32,
    pub category: String,
    pub status: Option<bool>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate(
            &props.title,
            &props.code,
            &props.category,
            props.price,
            props.stock,
        )?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: props.title,
            description: props.description,
            price: props.price,
            thumbnail: props.thumbnail,
            code: props.code,
            stock: props.stock,
            category: props.category,
            status: props.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn validate(
        title: &str,
        code: &str,
        category: &str,
        price: f64,
        stock: i32,
    ) -> Result<(), ProductError> {
        if title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }
        if code.trim().is_empty() {
            return Err(ProductError::CodeEmpty);
        }
        if category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ProductError::PriceNegative);
        }
        if stock < 0 {
            return Err(ProductError::StockNegative);
        }
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        title: String,
        description: Option<String>,
        price: f64,
        thumbnail: Option<String>,
        code: String,
        stock: i32,
        category: String,
        status: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
            category,
            status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            title: "Running Shoes".to_string(),
            description: None,
            price: 49.99,
            thumbnail: None,
            code: "SHOE-001".to_string(),
            stock: 5,
            category: "shoes".to_string(),
            status: None,
        }
    }

    #[test]
    fn should_default_status_to_available() {
        let product = Product::new(props()).unwrap();
        assert!(product.status);
    }

    #[test]
    fn should_reject_empty_title() {
        let mut p = props();
        p.title = "   ".to_string();
        assert!(matches!(Product::new(p), Err(ProductError::TitleEmpty)));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut p = props();
        p.price = -0.01;
        assert!(matches!(Product::new(p), Err(ProductError::PriceNegative)));
    }

    #[test]
    fn should_reject_negative_stock() {
        let mut p = props();
        p.stock = -1;
        assert!(matches!(Product::new(p), Err(ProductError::StockNegative)));
    }

    #[test]
    fn should_keep_provided_fields() {
        let mut p = props();
        p.description = Some("Light trail shoes".to_string());
        p.status = Some(false);
        let product = Product::new(p).unwrap();
        assert_eq!(product.description.as_deref(), Some("Light trail shoes"));
        assert!(!product.status);
    }
}
