//! Route definitions
//!
//! Resource routes are mounted under /api/v1; health probes sit at the root.

use axum::{routing::get, Router};

use crate::handlers::{health, movies, products, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(product_routes())
        .merge(movie_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products).post(products::create_product))
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}

/// Movie routes
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        // Static segments take priority over :id
        .route("/movies/stats", get(movies::movie_stats))
        .route("/movies/top-rated", get(movies::top_rated_movies))
        .route("/movies/by-genre", get(movies::movies_by_genre))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
