//! Product entity <-> model mapper

use top_core::entities::{Product, ProductDraft};

use super::user::parse_status;
use super::{BindValue, PgResource};
use crate::models::ProductModel;

/// Convert ProductModel to Product entity
impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock: model.stock,
            category: model.category,
            status: parse_status(model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl PgResource for Product {
    type Model = ProductModel;

    const COLUMNS: &'static str = "id, name, description, price, stock, category, status, \
                                   created_at, updated_at, deleted_at";

    const WRITE_COLUMNS: &'static [&'static str] =
        &["name", "description", "price", "stock", "category", "status"];

    fn draft_values(draft: &ProductDraft) -> Vec<BindValue> {
        vec![
            BindValue::Text(draft.name.clone()),
            BindValue::Text(draft.description.clone()),
            BindValue::Float(draft.price),
            BindValue::Int(draft.stock),
            BindValue::Text(draft.category.clone()),
            BindValue::SmallInt(draft.status.code()),
        ]
    }

    fn record_values(&self) -> Vec<BindValue> {
        vec![
            BindValue::Text(self.name.clone()),
            BindValue::Text(self.description.clone()),
            BindValue::Float(self.price),
            BindValue::Int(self.stock),
            BindValue::Text(self.category.clone()),
            BindValue::SmallInt(self.status.code()),
        ]
    }
}
