//! Product entity

use chrono::{DateTime, Utc};

use super::resource::{apply, FieldValue, Resource, ResourceSpec};
use super::status::Status;

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Strictly positive
    pub price: f64,
    /// Non-negative
    pub stock: i32,
    pub category: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
    pub status: Status,
}

/// Partial update of a product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub status: Option<Status>,
}

impl Resource for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    const SPEC: ResourceSpec = ResourceSpec {
        name: "product",
        table: "products",
        search_columns: &["name", "description"],
        exact_column: Some("category"),
        soft_delete: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn merge(&mut self, patch: ProductPatch) {
        apply(&mut self.name, patch.name);
        apply(&mut self.description, patch.description);
        apply(&mut self.price, patch.price);
        apply(&mut self.stock, patch.stock);
        apply(&mut self.category, patch.category);
        apply(&mut self.status, patch.status);
    }

    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        match column {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "name" => Some(FieldValue::Text(&self.name)),
            "description" => Some(FieldValue::Text(&self.description)),
            "price" => Some(FieldValue::Number(self.price)),
            "stock" => Some(FieldValue::Number(f64::from(self.stock))),
            "category" => Some(FieldValue::Text(&self.category)),
            "status" => Some(FieldValue::Number(f64::from(self.status.code()))),
            _ => None,
        }
    }
}
