//! Movie handlers
//!
//! CRUD, paginated listing, rating-ordered listings and statistics.

use axum::{extract::State, Json};
use top_service::dto::{
    ApiResponse, CreateMovieRequest, MessageResponse, MovieResponse, MovieStatsResponse,
    PageResponse, UpdateMovieRequest,
};

use crate::extractors::{IdPath, ListQuery, RankedQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a movie
///
/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> ApiResult<Created<Json<ApiResponse<MovieResponse>>>> {
    let movie = state.movies().create(request.into()).await?;
    Ok(Created(Json(ApiResponse::with_message(
        MovieResponse::from(movie),
        "Movie created successfully",
    ))))
}

/// Get movie by ID
///
/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApiResponse<MovieResponse>>> {
    let movie = state.movies().get(id).await?;
    Ok(Json(ApiResponse::new(movie.into())))
}

/// List movies, newest first, optionally within one genre
///
/// GET /movies?page=&limit=&search=&genre=
pub async fn list_movies(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<ApiResponse<PageResponse<MovieResponse>>>> {
    let page_request = query.page_request();
    let page = state.movies().list(page_request, query.keyword(), query.genre).await?;
    Ok(Json(ApiResponse::new(PageResponse::<MovieResponse>::from(page))))
}

/// Partially update a movie
///
/// PUT /movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMovieRequest>,
) -> ApiResult<Json<ApiResponse<MovieResponse>>> {
    let movie = state.movies().update(id, request.into()).await?;
    Ok(Json(ApiResponse::with_message(
        MovieResponse::from(movie),
        "Movie updated successfully",
    )))
}

/// Delete a movie permanently
///
/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    state.movies().delete(id).await?;
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

/// Movies rated 8.0 or higher, best first
///
/// GET /movies/top-rated?limit=
pub async fn top_rated_movies(
    State(state): State<AppState>,
    query: RankedQuery,
) -> ApiResult<Json<ApiResponse<Vec<MovieResponse>>>> {
    let movies = state.movies().top_rated(query.limit()).await?;
    Ok(Json(ApiResponse::new(
        movies.iter().map(MovieResponse::from).collect(),
    )))
}

/// Movies of one genre, best first
///
/// GET /movies/by-genre?genre=&limit=
pub async fn movies_by_genre(
    State(state): State<AppState>,
    query: RankedQuery,
) -> ApiResult<Json<ApiResponse<Vec<MovieResponse>>>> {
    let movies = state.movies().list_by_genre(query.genre(), query.limit()).await?;
    Ok(Json(ApiResponse::new(
        movies.iter().map(MovieResponse::from).collect(),
    )))
}

/// Catalog statistics
///
/// GET /movies/stats
pub async fn movie_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<MovieStatsResponse>>> {
    let stats = state.movies().stats().await?;
    Ok(Json(ApiResponse::new(stats.into())))
}
