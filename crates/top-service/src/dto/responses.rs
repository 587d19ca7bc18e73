//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// Message-only response (used for deletions)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One page of a paginated listing
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub list: Vec<T>,
    /// Rows matching the filter across all pages
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

// ============================================================================
// Resource Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product response
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Movie response; the cover is exposed as `poster` and the playlist as `videoUrl`
#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub poster: String,
    pub genre: String,
    pub director: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
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

// ============================================================================
// Stats Responses
// ============================================================================

/// Movie count for one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: i64,
}

/// Aggregate movie statistics
#[derive(Debug, Clone, Serialize)]
pub struct MovieStatsResponse {
    pub total: i64,
    pub avg_rating: f64,
    /// Sorted by genre; movies without a genre are not listed
    pub genre_stats: Vec<GenreCount>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    /// Build from the individual check results
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.all_healthy() { "ready" } else { "not_ready" };
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            checks,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.all_healthy()
    }
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl HealthChecks {
    pub fn all_healthy(&self) -> bool {
        self.database == "healthy"
    }
}
