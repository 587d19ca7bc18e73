//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and the `DATABASE_URL`
//! environment variable; they are skipped otherwise. Migrations are applied
//! by the server on start.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, unique_suffix, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let created: Envelope<UserResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.data.username, request.username);
    assert_eq!(created.data.status, 1);
    assert!(created.message.is_some());

    let response = server
        .get(&format!("/api/v1/users/{}", created.data.id))
        .await
        .unwrap();
    let fetched: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.email, request.email);
    assert_eq!(fetched.data.phone, request.phone);
    assert_eq!(fetched.data.created_at, created.data.created_at);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let duplicate = json!({
        "username": format!("other{}", unique_suffix()),
        "email": request.email,
    });
    let response = server.post("/api/v1/users", &duplicate).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = json!({ "username": "valid_name", "email": "not-an-email" });

    let response = server.post("/api/v1/users", &body).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert!(error.error.details.is_some());
}

#[tokio::test]
async fn test_update_user_partial() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    let created: Envelope<UserResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/users/{}", created.data.id);

    // Empty strings leave fields untouched; status 0 is applied
    let response = server
        .put(&path, &json!({ "username": "", "status": 0 }))
        .await
        .unwrap();
    let updated: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.username, request.username);
    assert_eq!(updated.data.email, request.email);
    assert_eq!(updated.data.status, 0);

    // Empty body changes nothing
    let response = server.put(&path, &json!({})).await.unwrap();
    let unchanged: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.data.phone, request.phone);
    assert_eq!(unchanged.data.status, 0);
}

#[tokio::test]
async fn test_delete_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/users", &CreateUserRequest::unique())
        .await
        .unwrap();
    let created: Envelope<UserResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/users/{}", created.data.id);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.put(&path, &json!({ "phone": "1" })).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_users_by_keyword() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    server.post("/api/v1/users", &request).await.unwrap();

    // Email domain is shared, so search by the unique username
    let response = server
        .get(&format!("/api/v1/users?keyword={}", request.username.to_uppercase()))
        .await
        .unwrap();
    let page: Envelope<PageBody<UserResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.total, 1);
    assert_eq!(page.data.list[0].username, request.username);
    assert_eq!(page.data.page, 1);
    assert_eq!(page.data.page_size, 10);
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
async fn test_list_products_keyword_and_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = format!("cat{}", unique_suffix());
    let a = format!("A-{category}");
    let b = format!("B-{category}");

    for req in [
        CreateProductRequest::new(&a, 10.0, 5, &category),
        CreateProductRequest::new(&b, 20.0, 0, &category),
    ] {
        let response = server.post("/api/v1/products", &req).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/products?category={category}&keyword={b}"))
        .await
        .unwrap();
    let page: Envelope<PageBody<ProductResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.total, 1);
    assert_eq!(page.data.list[0].name, b);
    assert_eq!(page.data.list[0].stock, 0);

    let response = server
        .get(&format!("/api/v1/products?category={category}"))
        .await
        .unwrap();
    let page: Envelope<PageBody<ProductResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<_> = page.data.list.iter().map(|p| p.name.clone()).collect();
    assert_eq!(page.data.total, 2);
    assert_eq!(names, [b, a]);
}

#[tokio::test]
async fn test_list_products_page_past_end() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = format!("cat{}", unique_suffix());
    let response = server
        .post(
            "/api/v1/products",
            &CreateProductRequest::new("only", 1.0, 1, &category),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/products?category={category}&page=3&page_size=1000"))
        .await
        .unwrap();
    let page: Envelope<PageBody<ProductResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.list.is_empty());
    assert_eq!(page.data.total, 1);
    assert_eq!(page.data.page_size, 100);
}

#[tokio::test]
async fn test_update_product_stock_to_zero() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/products",
            &CreateProductRequest::new("widget", 9.5, 12, "tools"),
        )
        .await
        .unwrap();
    let created: Envelope<ProductResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/products/{}", created.data.id),
            &json!({ "stock": 0 }),
        )
        .await
        .unwrap();
    let updated: Envelope<ProductResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.stock, 0);
    assert_eq!(updated.data.name, "widget");
    assert!((updated.data.price - 9.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_create_product_rejects_zero_price() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/products", &CreateProductRequest::new("free", 0.0, 1, ""))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Movie Tests
// ============================================================================

#[tokio::test]
async fn test_create_movie_renames_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMovieRequest::new(format!("Matrix {}", unique_suffix()), "scifi", 8.7);

    let response = server.post("/api/v1/movies", &request).await.unwrap();
    let created: Envelope<MovieResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.data.poster, "poster.jpg");
    assert_eq!(created.data.video_url, "stream.m3u8");
    assert_eq!(created.data.release_date.as_deref(), Some("1999-03-31"));
    assert_eq!(created.data.duration, 0);
}

#[tokio::test]
async fn test_movie_rankings_and_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let genre = format!("genre{}", unique_suffix());
    for (title, rating) in [("first", 9.0), ("second", 7.5), ("third", 8.5)] {
        let req = CreateMovieRequest::new(format!("{title}-{genre}"), &genre, rating);
        let response = server.post("/api/v1/movies", &req).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // By genre: best rated first
    let response = server
        .get(&format!("/api/v1/movies/by-genre?genre={genre}"))
        .await
        .unwrap();
    let movies: Envelope<Vec<MovieResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    let ratings: Vec<_> = movies.data.iter().map(|m| m.rating).collect();
    assert_eq!(ratings, [9.0, 8.5, 7.5]);

    // Top rated: only ours above the threshold, in rating order
    let response = server.get("/api/v1/movies/top-rated?limit=0").await.unwrap();
    let movies: Envelope<Vec<MovieResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(movies.data.iter().all(|m| m.rating >= 8.0));
    assert!(movies.data.windows(2).all(|w| w[0].rating >= w[1].rating));
    let ours: Vec<_> = movies
        .data
        .iter()
        .filter(|m| m.genre == genre)
        .map(|m| m.rating)
        .collect();
    assert_eq!(ours, [9.0, 8.5]);

    // Stats: our genre counted once per movie
    let response = server.get("/api/v1/movies/stats").await.unwrap();
    let stats: Envelope<MovieStatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stats.data.total >= 3);
    assert!(stats.data.avg_rating > 0.0);
    let entry = stats
        .data
        .genre_stats
        .iter()
        .find(|g| g.genre == genre)
        .expect("genre missing from stats");
    assert_eq!(entry.count, 3);
}

#[tokio::test]
async fn test_list_movies_with_aliases() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let genre = format!("genre{}", unique_suffix());
    for title in ["alpha", "beta", "gamma"] {
        let req = CreateMovieRequest::new(format!("{title}-{genre}"), &genre, 5.0);
        server.post("/api/v1/movies", &req).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/movies?genre={genre}&limit=2&page=1"))
        .await
        .unwrap();
    let page: Envelope<PageBody<MovieResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.total, 3);
    assert_eq!(page.data.list.len(), 2);
    assert_eq!(page.data.list[0].title, format!("gamma-{genre}"));

    let response = server
        .get(&format!("/api/v1/movies?genre={genre}&search=BETA"))
        .await
        .unwrap();
    let page: Envelope<PageBody<MovieResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.total, 1);
}

#[tokio::test]
async fn test_delete_movie_is_permanent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMovieRequest::new(format!("gone {}", unique_suffix()), "", 6.0);
    let response = server.post("/api/v1/movies", &request).await.unwrap();
    let created: Envelope<MovieResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/movies/{}", created.data.id);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_movie_rating_to_zero() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMovieRequest::new(format!("flop {}", unique_suffix()), "drama", 4.0);
    let response = server.post("/api/v1/movies", &request).await.unwrap();
    let created: Envelope<MovieResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/movies/{}", created.data.id),
            &json!({ "rating": 0.0, "title": "" }),
        )
        .await
        .unwrap();
    let updated: Envelope<MovieResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.data.rating.abs() < f32::EPSILON);
    assert_eq!(updated.data.title, request.title);
    assert_eq!(updated.data.genre, "drama");
}
