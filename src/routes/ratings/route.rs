use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{CreateRatingRequest, RatingResponse};
use crate::entities::course_rating;
use crate::error::ApiError;
use crate::repositories::{CourseRepository, RatingRepository, StudentRepository};
use crate::routes::courses::route::course_link;
use crate::routes::students::route::student_link;
use crate::serialize::{ExpandDepth, StatusResponse};

pub fn create_route() -> Router {
    Router::new()
        .route("/course-rating/", get(list_ratings))
        .route("/course-rating/", post(rate_course))
        .route(
            "/fetch-rating-status/{student_id}/{course_id}",
            get(rating_status),
        )
}

async fn rating_response(
    rating: course_rating::Model,
    depth: ExpandDepth,
) -> Result<RatingResponse, ApiError> {
    let course = course_link(rating.course_id, depth).await?;
    let student = student_link(rating.student_id, depth).await?;

    Ok(RatingResponse {
        id: rating.id,
        course,
        student,
        rating: rating.rating,
        reviews: rating.reviews,
        review_time: rating.review_time,
    })
}

/// List all course ratings
#[utoipa::path(
    get,
    path = "/course-rating/",
    responses(
        (status = 200, description = "Ratings retrieved", body = [RatingResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ratings"
)]
pub async fn list_ratings() -> Result<(StatusCode, Json<Vec<RatingResponse>>), ApiError> {
    let rating_repo = RatingRepository::new();
    let ratings = rating_repo.find_all().await?;

    let mut response = Vec::new();
    for rating in ratings {
        response.push(rating_response(rating, ExpandDepth::Related).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Rate a course. A student may rate the same course repeatedly; every row
/// counts towards the average.
#[utoipa::path(
    post,
    path = "/course-rating/",
    request_body = CreateRatingRequest,
    responses(
        (status = 201, description = "Rating created", body = RatingResponse),
        (status = 400, description = "Invalid rating or missing course/student"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ratings"
)]
pub async fn rate_course(
    Json(payload): Json<CreateRatingRequest>,
) -> Result<(StatusCode, Json<RatingResponse>), ApiError> {
    if payload.rating < 0 {
        return Err(ApiError::Validation(
            "rating must be non-negative".to_string(),
        ));
    }

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

    let rating_repo = RatingRepository::new();
    let rating = rating_repo
        .create(payload.course, payload.student, payload.rating, payload.reviews)
        .await?;

    let response = rating_response(rating, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Whether the student has rated the course. Unknown ids answer
/// `{"bool": false}`, never an error.
#[utoipa::path(
    get,
    path = "/fetch-rating-status/{student_id}/{course_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Rating status", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ratings"
)]
pub async fn rating_status(
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let rating_repo = RatingRepository::new();
    let rated = rating_repo.exists(student_id, course_id).await?;

    Ok((StatusCode::OK, Json(StatusResponse::new(rated))))
}
