//! Product database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
