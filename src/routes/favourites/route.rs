use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{CreateFavouriteRequest, FavouriteResponse};
use crate::entities::student_favourite_course;
use crate::error::ApiError;
use crate::repositories::{CourseRepository, FavouriteRepository, StudentRepository};
use crate::routes::courses::route::course_link;
use crate::routes::students::route::student_link;
use crate::serialize::{ExpandDepth, StatusResponse};

pub fn create_route() -> Router {
    Router::new()
        .route("/student-add-favourite-course/", get(list_favourites))
        .route("/student-add-favourite-course/", post(add_favourite))
        .route(
            "/fetch-favourite-courses/{student_id}",
            get(student_favourites),
        )
        .route(
            "/student-remove-favourite-course/{course_id}/{student_id}",
            get(remove_favourite),
        )
        .route(
            "/fetch-favourite-status/{student_id}/{course_id}",
            get(favourite_status),
        )
}

async fn favourite_response(
    favourite: student_favourite_course::Model,
    depth: ExpandDepth,
) -> Result<FavouriteResponse, ApiError> {
    let course = course_link(favourite.course_id, depth).await?;
    let student = student_link(favourite.student_id, depth).await?;

    Ok(FavouriteResponse {
        id: favourite.id,
        course,
        student,
        status: favourite.status,
    })
}

/// List all favourite-course rows
#[utoipa::path(
    get,
    path = "/student-add-favourite-course/",
    responses(
        (status = 200, description = "Favourites retrieved", body = [FavouriteResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Favourites"
)]
pub async fn list_favourites() -> Result<(StatusCode, Json<Vec<FavouriteResponse>>), ApiError> {
    let favourite_repo = FavouriteRepository::new();
    let favourites = favourite_repo.find_all().await?;

    let mut response = Vec::new();
    for favourite in favourites {
        response.push(favourite_response(favourite, ExpandDepth::Deep).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Mark a course as a student's favourite. Duplicates are allowed.
#[utoipa::path(
    post,
    path = "/student-add-favourite-course/",
    request_body = CreateFavouriteRequest,
    responses(
        (status = 201, description = "Favourite created", body = FavouriteResponse),
        (status = 400, description = "Referenced course or student does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Favourites"
)]
pub async fn add_favourite(
    Json(payload): Json<CreateFavouriteRequest>,
) -> Result<(StatusCode, Json<FavouriteResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    if course_repo.find_by_id(payload.course).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Course {} does not exist",
            payload.course
        )));
    }

    let student_repo = StudentRepository::new();
    if student_repo.find_by_id(payload.student).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Student {} does not exist",
            payload.student
        )));
    }

    let favourite_repo = FavouriteRepository::new();
    let favourite = favourite_repo
        .create(payload.course, payload.student, payload.status)
        .await?;

    let response = favourite_response(favourite, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Favourite courses of a student
#[utoipa::path(
    get,
    path = "/fetch-favourite-courses/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Favourites of the student", body = [FavouriteResponse]),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Favourites"
)]
pub async fn student_favourites(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<FavouriteResponse>>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let favourite_repo = FavouriteRepository::new();
    let favourites = favourite_repo.find_by_student(student_id).await?;

    let mut response = Vec::new();
    for favourite in favourites {
        response.push(favourite_response(favourite, ExpandDepth::Deep).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Remove a course from a student's favourites. True iff at least one row
/// was deleted, so a repeat call answers `{"bool": false}`.
#[utoipa::path(
    get,
    path = "/student-remove-favourite-course/{course_id}/{student_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Removal outcome", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Favourites"
)]
pub async fn remove_favourite(
    Path((course_id, student_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let favourite_repo = FavouriteRepository::new();
    let removed = favourite_repo.remove(student_id, course_id).await?;

    Ok((StatusCode::OK, Json(StatusResponse::new(removed))))
}

/// Whether the course is among the student's favourites. Unknown ids answer
/// `{"bool": false}`, never an error.
#[utoipa::path(
    get,
    path = "/fetch-favourite-status/{student_id}/{course_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Favourite status", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Favourites"
)]
pub async fn favourite_status(
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let favourite_repo = FavouriteRepository::new();
    let favourite = favourite_repo.exists(student_id, course_id).await?;

    Ok((StatusCode::OK, Json(StatusResponse::new(favourite))))
}
