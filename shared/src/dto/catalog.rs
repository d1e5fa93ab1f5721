use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Catalog product record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub company_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i64,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Product create/update payload (POST and PUT share one shape)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRequest {
    pub category_id: Option<i64>,
    pub name: String,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i64,
    pub active: bool,
}

impl ProductRequest {
    pub fn from_product(product: &Product) -> Self {
        ProductRequest {
            category_id: product.category_id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            description: product.description.clone(),
            price_cents: product.price_cents,
            stock: product.stock,
            active: product.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_backend_shape() {
        let json = r#"{
            "id": 12,
            "company_id": 3,
            "category_id": null,
            "name": "Thermal paper roll",
            "sku": "TPR-80",
            "description": null,
            "price_cents": 459,
            "stock": 240,
            "active": true,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-02T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price_cents, 459);
        assert_eq!(product.category_id, None);
        assert!(product.active);
    }

    #[test]
    fn test_request_prefills_from_record() {
        let product = Product {
            id: 12,
            company_id: 3,
            category_id: Some(2),
            name: "Thermal paper roll".to_string(),
            sku: Some("TPR-80".to_string()),
            description: None,
            price_cents: 459,
            stock: 240,
            active: true,
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-02T10:00:00Z".to_string(),
        };
        let request = ProductRequest::from_product(&product);
        assert_eq!(request.name, product.name);
        assert_eq!(request.category_id, Some(2));
        assert_eq!(request.price_cents, 459);
    }
}
