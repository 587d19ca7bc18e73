//! Product handlers
//!
//! CRUD and paginated listing of catalog products.

use axum::{extract::State, Json};
use top_service::dto::{
    ApiResponse, CreateProductRequest, MessageResponse, PageResponse, ProductResponse,
    UpdateProductRequest,
};

use crate::extractors::{IdPath, ListQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a product
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<ApiResponse<ProductResponse>>>> {
    let product = state.products().create(request.into()).await?;
    Ok(Created(Json(ApiResponse::with_message(
        ProductResponse::from(product),
        "Product created successfully",
    ))))
}

/// Get product by ID
///
/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApiResponse<ProductResponse>>> {
    let product = state.products().get(id).await?;
    Ok(Json(ApiResponse::new(product.into())))
}

/// List products, newest first, optionally within one category
///
/// GET /products?page=&page_size=&keyword=&category=
pub async fn list_products(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<ApiResponse<PageResponse<ProductResponse>>>> {
    let page_request = query.page_request();
    let page = state.products().list(page_request, query.keyword(), query.category).await?;
    Ok(Json(ApiResponse::new(PageResponse::<ProductResponse>::from(page))))
}

/// Partially update a product
///
/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Json<ApiResponse<ProductResponse>>> {
    let product = state.products().update(id, request.into()).await?;
    Ok(Json(ApiResponse::with_message(
        ProductResponse::from(product),
        "Product updated successfully",
    )))
}

/// Delete a product (soft)
///
/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    state.products().delete(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
