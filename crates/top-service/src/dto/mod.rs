//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between requests, domain drafts/patches, entities, and responses

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateMovieRequest, CreateProductRequest, CreateUserRequest, UpdateMovieRequest,
    UpdateProductRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, GenreCount, HealthChecks, HealthResponse, MessageResponse, MovieResponse,
    MovieStatsResponse, PageResponse, ProductResponse, ReadinessResponse, UserResponse,
};
