//! User handlers
//!
//! CRUD and paginated listing of user accounts.

use axum::{extract::State, Json};
use top_service::dto::{
    ApiResponse, CreateUserRequest, MessageResponse, PageResponse, UpdateUserRequest,
    UserResponse,
};

use crate::extractors::{IdPath, ListQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<ApiResponse<UserResponse>>>> {
    let user = state.users().create(request.into()).await?;
    Ok(Created(Json(ApiResponse::with_message(
        UserResponse::from(user),
        "User created successfully",
    ))))
}

/// Get user by ID
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.users().get(id).await?;
    Ok(Json(ApiResponse::new(user.into())))
}

/// List users, newest first
///
/// GET /users?page=&page_size=&keyword=
pub async fn list_users(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<ApiResponse<PageResponse<UserResponse>>>> {
    let page = state.users().list(query.page_request(), query.keyword(), None).await?;
    Ok(Json(ApiResponse::new(PageResponse::<UserResponse>::from(page))))
}

/// Partially update a user
///
/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.users().update(id, request.into()).await?;
    Ok(Json(ApiResponse::with_message(
        UserResponse::from(user),
        "User updated successfully",
    )))
}

/// Delete a user (soft)
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    state.users().delete(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
