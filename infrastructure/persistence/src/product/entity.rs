use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
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

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.title,
            self.description,
            self.price,
            self.thumbnail,
            self.code,
            self.stock,
            self.category,
            self.status,
            self.created_at,
            self.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_entity_to_domain_product() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let entity = ProductEntity {
            id,
            title: "Running Shoes".to_string(),
            description: None,
            price: 49.99,
            thumbnail: Some("shoes.png".to_string()),
            code: "SHOE-001".to_string(),
            stock: 3,
            category: "shoes".to_string(),
            status: false,
            created_at: now,
            updated_at: now,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, id);
        assert_eq!(product.code, "SHOE-001");
        assert_eq!(product.thumbnail.as_deref(), Some("shoes.png"));
        assert!(!product.status);
    }
}
