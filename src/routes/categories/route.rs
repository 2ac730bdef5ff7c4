use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{CategoryResponse, CreateCategoryRequest};
use crate::error::ApiError;
use crate::repositories::CategoryRepository;
use crate::serialize::{ExpandDepth, Linked};

pub fn create_route() -> Router {
    Router::new()
        .route("/category/", get(list_categories))
        .route("/category/", post(create_category))
}

/// Renders a category foreign key as either the raw id or the full object.
/// A dangling id falls back to the raw id rather than failing the request.
pub(crate) async fn category_link(
    category_id: i32,
    depth: ExpandDepth,
) -> Result<Linked<CategoryResponse>, ApiError> {
    if !depth.expands() {
        return Ok(Linked::Id(category_id));
    }

    let category_repo = CategoryRepository::new();
    match category_repo.find_by_id(category_id).await? {
        Some(category) => Ok(Linked::Full(Box::new(CategoryResponse::from(category)))),
        None => Ok(Linked::Id(category_id)),
    }
}

/// List all course categories
#[utoipa::path(
    get,
    path = "/category/",
    responses(
        (status = 200, description = "Categories retrieved", body = [CategoryResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Categories"
)]
pub async fn list_categories() -> Result<(StatusCode, Json<Vec<CategoryResponse>>), ApiError> {
    let category_repo = CategoryRepository::new();

    let categories = category_repo.find_all().await?;
    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Create a course category
#[utoipa::path(
    post,
    path = "/category/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let category_repo = CategoryRepository::new();

    let category = category_repo
        .create(payload.title, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}
