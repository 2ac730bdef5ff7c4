use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{
    ChapterResponse, CreateChapterRequest, CreateCourseChapterRequest, UpdateChapterRequest,
};
use crate::entities::chapter;
use crate::error::ApiError;
use crate::repositories::{ChapterRepository, ChapterUpdate, CourseRepository};
use crate::routes::courses::route::course_link;
use crate::serialize::ExpandDepth;

pub fn create_route() -> Router {
    Router::new()
        .route("/chapter/", get(list_chapters))
        .route("/chapter/", post(create_chapter))
        .route("/course-chapters/{course_id}/", get(course_chapters))
        .route("/course-chapters/{course_id}/", post(create_course_chapter))
        .route("/chapter/{chapter_id}/", get(get_chapter))
        .route("/chapter/{chapter_id}/", put(update_chapter))
        .route("/chapter/{chapter_id}/", patch(update_chapter))
        .route("/chapter/{chapter_id}/", delete(delete_chapter))
}

async fn chapter_response(
    chapter: chapter::Model,
    depth: ExpandDepth,
) -> Result<ChapterResponse, ApiError> {
    let course = course_link(chapter.course_id, depth).await?;

    Ok(ChapterResponse {
        id: chapter.id,
        course,
        title: chapter.title,
        description: chapter.description,
        video: chapter.video,
        remarks: chapter.remarks,
    })
}

/// List all chapters
#[utoipa::path(
    get,
    path = "/chapter/",
    responses(
        (status = 200, description = "Chapters retrieved", body = [ChapterResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn list_chapters() -> Result<(StatusCode, Json<Vec<ChapterResponse>>), ApiError> {
    let chapter_repo = ChapterRepository::new();
    let chapters = chapter_repo.find_all().await?;

    let mut response = Vec::new();
    for chapter in chapters {
        response.push(chapter_response(chapter, ExpandDepth::Related).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Create a chapter
#[utoipa::path(
    post,
    path = "/chapter/",
    request_body = CreateChapterRequest,
    responses(
        (status = 201, description = "Chapter created", body = ChapterResponse),
        (status = 400, description = "Referenced course does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn create_chapter(
    Json(payload): Json<CreateChapterRequest>,
) -> Result<(StatusCode, Json<ChapterResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    if course_repo.find_by_id(payload.course).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Course {} does not exist",
            payload.course
        )));
    }

    let chapter_repo = ChapterRepository::new();
    let chapter = chapter_repo
        .create(
            payload.course,
            payload.title,
            payload.description,
            payload.video,
            payload.remarks,
        )
        .await?;

    let response = chapter_response(chapter, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Chapters of a course
#[utoipa::path(
    get,
    path = "/course-chapters/{course_id}/",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course chapters", body = [ChapterResponse]),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn course_chapters(
    Path(course_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<ChapterResponse>>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let chapter_repo = ChapterRepository::new();
    let chapters = chapter_repo.find_by_course(course_id).await?;

    let mut response = Vec::new();
    for chapter in chapters {
        response.push(chapter_response(chapter, ExpandDepth::Related).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Create a chapter under the course in the path
#[utoipa::path(
    post,
    path = "/course-chapters/{course_id}/",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CreateCourseChapterRequest,
    responses(
        (status = 201, description = "Chapter created", body = ChapterResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn create_course_chapter(
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateCourseChapterRequest>,
) -> Result<(StatusCode, Json<ChapterResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let chapter_repo = ChapterRepository::new();
    let chapter = chapter_repo
        .create(
            course_id,
            payload.title,
            payload.description,
            payload.video,
            payload.remarks,
        )
        .await?;

    let response = chapter_response(chapter, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get chapter by ID
#[utoipa::path(
    get,
    path = "/chapter/{chapter_id}/",
    params(
        ("chapter_id" = i32, Path, description = "Chapter ID")
    ),
    responses(
        (status = 200, description = "Chapter retrieved", body = ChapterResponse),
        (status = 404, description = "Chapter not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn get_chapter(
    Path(chapter_id): Path<i32>,
) -> Result<(StatusCode, Json<ChapterResponse>), ApiError> {
    let chapter_repo = ChapterRepository::new();

    let chapter = chapter_repo
        .find_by_id(chapter_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chapter not found".to_string()))?;

    let response = chapter_response(chapter, ExpandDepth::Related).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Update chapter (full or partial)
#[utoipa::path(
    put,
    path = "/chapter/{chapter_id}/",
    params(
        ("chapter_id" = i32, Path, description = "Chapter ID")
    ),
    request_body = UpdateChapterRequest,
    responses(
        (status = 200, description = "Chapter updated", body = ChapterResponse),
        (status = 400, description = "Referenced course does not exist"),
        (status = 404, description = "Chapter not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn update_chapter(
    Path(chapter_id): Path<i32>,
    Json(payload): Json<UpdateChapterRequest>,
) -> Result<(StatusCode, Json<ChapterResponse>), ApiError> {
    if let Some(course_id) = payload.course {
        let course_repo = CourseRepository::new();
        if course_repo.find_by_id(course_id).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "Course {course_id} does not exist"
            )));
        }
    }

    let updates = ChapterUpdate {
        course_id: payload.course,
        title: payload.title,
        description: payload.description,
        video: payload.video,
        remarks: payload.remarks,
    };

    let chapter_repo = ChapterRepository::new();
    let updated = chapter_repo
        .update(chapter_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chapter not found".to_string()))?;

    let response = chapter_response(updated, ExpandDepth::Flat).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete chapter
#[utoipa::path(
    delete,
    path = "/chapter/{chapter_id}/",
    params(
        ("chapter_id" = i32, Path, description = "Chapter ID")
    ),
    responses(
        (status = 204, description = "Chapter deleted"),
        (status = 404, description = "Chapter not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn delete_chapter(Path(chapter_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let chapter_repo = ChapterRepository::new();

    let deleted = chapter_repo.delete(chapter_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Chapter not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
