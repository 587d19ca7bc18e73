//! Movie database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for movies table
#[derive(Debug, Clone, FromRow)]
pub struct MovieModel {
    pub id: i64,
    pub title: String,
    pub cover: String,
    pub genre: String,
    pub director: String,
    pub m3u8: String,
    pub actors: String,
    pub release_date: Option<NaiveDate>,
    pub duration: i32,
    pub language: String,
    pub country: String,
    pub rating: f32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
