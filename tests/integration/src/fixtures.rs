//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.
//! Every generated name carries a process-unique suffix so tests sharing one
//! database can filter down to their own rows.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}x{n}", std::process::id())
}

/// `{"data": ..., "message": ...}` success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: Option<String>,
}

/// Paginated list body
#[derive(Debug, Deserialize)]
pub struct PageBody<T> {
    pub list: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// `{"error": {...}}` failure body
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            phone: "555-0100".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub status: i16,
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, price: f64, stock: i32, category: &str) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock,
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
    pub status: i16,
}

// ============================================================================
// Movies
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub poster: String,
    pub genre: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub rating: f32,
    pub release_date: Option<String>,
}

impl CreateMovieRequest {
    pub fn new(title: impl Into<String>, genre: &str, rating: f32) -> Self {
        Self {
            title: title.into(),
            poster: "poster.jpg".to_string(),
            genre: genre.to_string(),
            video_url: "stream.m3u8".to_string(),
            rating,
            release_date: Some("1999-03-31".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub poster: String,
    pub genre: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub rating: f32,
    pub release_date: Option<String>,
    pub duration: i32,
}

#[derive(Debug, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct MovieStatsResponse {
    pub total: i64,
    pub avg_rating: f64,
    pub genre_stats: Vec<GenreCount>,
}
