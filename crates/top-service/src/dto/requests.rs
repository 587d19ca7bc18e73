//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! In update requests an empty string means "leave unchanged": it is decoded
//! as `None`, so a stored string can never be cleared through an update.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Decode `""` the same as an absent field
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: String,

    /// 1 = active (default), 0 = inactive
    #[validate(range(min = 0, max = 1, message = "Status must be 0 or 1"))]
    pub status: Option<i16>,
}

/// Update user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(range(min = 0, max = 1, message = "Status must be 0 or 1"))]
    pub status: Option<i16>,
}

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,

    #[serde(default)]
    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: String,

    #[validate(range(min = 0, max = 1, message = "Status must be 0 or 1"))]
    pub status: Option<i16>,
}

/// Update product request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 0, max = 1, message = "Status must be 0 or 1"))]
    pub status: Option<i16>,
}

// ============================================================================
// Movie Requests
// ============================================================================

/// Create movie request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Cover image
    #[serde(default, alias = "poster")]
    #[validate(length(max = 255, message = "Cover must be at most 255 characters"))]
    pub cover: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Director must be at most 100 characters"))]
    pub director: String,

    /// Playback playlist reference
    #[serde(default, alias = "videoUrl")]
    #[validate(length(max = 500, message = "m3u8 must be at most 500 characters"))]
    pub m3u8: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Actors must be at most 500 characters"))]
    pub actors: String,

    /// `YYYY-MM-DD`
    pub release_date: Option<NaiveDate>,

    /// Minutes
    #[serde(default)]
    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: i32,

    #[serde(default)]
    #[validate(length(max = 50, message = "Language must be at most 50 characters"))]
    pub language: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: String,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: f32,

    #[serde(default)]
    pub description: String,
}

/// Update movie request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[serde(default, alias = "poster", deserialize_with = "empty_as_none")]
    #[validate(length(max = 255, message = "Cover must be at most 255 characters"))]
    pub cover: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 100, message = "Director must be at most 100 characters"))]
    pub director: Option<String>,

    #[serde(default, alias = "videoUrl", deserialize_with = "empty_as_none")]
    #[validate(length(max = 500, message = "m3u8 must be at most 500 characters"))]
    pub m3u8: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 500, message = "Actors must be at most 500 characters"))]
    pub actors: Option<String>,

    pub release_date: Option<NaiveDate>,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 50, message = "Language must be at most 50 characters"))]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}
