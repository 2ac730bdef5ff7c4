use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{CreateStudyMaterialRequest, StudyMaterialResponse, UpdateStudyMaterialRequest};
use crate::entities::study_material;
use crate::error::ApiError;
use crate::repositories::{CourseRepository, StudyMaterialRepository, StudyMaterialUpdate};
use crate::routes::courses::route::course_link;
use crate::serialize::ExpandDepth;

pub fn create_route() -> Router {
    Router::new()
        .route("/study-material/", get(list_study_materials))
        .route("/study-material/", post(create_study_material))
        .route(
            "/course-study-materials/{course_id}/",
            get(course_study_materials),
        )
        .route("/study-material/{material_id}/", get(get_study_material))
        .route("/study-material/{material_id}/", put(update_study_material))
        .route(
            "/study-material/{material_id}/",
            patch(update_study_material),
        )
        .route(
            "/study-material/{material_id}/",
            delete(delete_study_material),
        )
}

async fn study_material_response(
    material: study_material::Model,
    depth: ExpandDepth,
) -> Result<StudyMaterialResponse, ApiError> {
    let course = course_link(material.course_id, depth).await?;

    Ok(StudyMaterialResponse {
        id: material.id,
        course,
        title: material.title,
        description: material.description,
        upload: material.upload,
        remarks: material.remarks,
    })
}

/// List all study materials
#[utoipa::path(
    get,
    path = "/study-material/",
    responses(
        (status = 200, description = "Study materials retrieved", body = [StudyMaterialResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Study materials"
)]
pub async fn list_study_materials()
-> Result<(StatusCode, Json<Vec<StudyMaterialResponse>>), ApiError> {
    let material_repo = StudyMaterialRepository::new();
    let materials = material_repo.find_all().await?;

    let mut response = Vec::new();
    for material in materials {
        response.push(study_material_response(material, ExpandDepth::Related).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Attach a study material to a course
#[utoipa::path(
    post,
    path = "/study-material/",
    request_body = CreateStudyMaterialRequest,
    responses(
        (status = 201, description = "Study material created", body = StudyMaterialResponse),
        (status = 400, description = "Referenced course does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Study materials"
)]
pub async fn create_study_material(
    Json(payload): Json<CreateStudyMaterialRequest>,
) -> Result<(StatusCode, Json<StudyMaterialResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    if course_repo.find_by_id(payload.course).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Course {} does not exist",
            payload.course
        )));
    }

    let material_repo = StudyMaterialRepository::new();
    let material = material_repo
        .create(
            payload.course,
            payload.title,
            payload.description,
            payload.upload,
            payload.remarks,
        )
        .await?;

    let response = study_material_response(material, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Study materials of a course
#[utoipa::path(
    get,
    path = "/course-study-materials/{course_id}/",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Study materials retrieved", body = [StudyMaterialResponse]),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Study materials"
)]
pub async fn course_study_materials(
    Path(course_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<StudyMaterialResponse>>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let material_repo = StudyMaterialRepository::new();
    let materials = material_repo.find_by_course(course_id).await?;

    let mut response = Vec::new();
    for material in materials {
        response.push(study_material_response(material, ExpandDepth::Related).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Get study material by ID
#[utoipa::path(
    get,
    path = "/study-material/{material_id}/",
    params(
        ("material_id" = i32, Path, description = "Study material ID")
    ),
    responses(
        (status = 200, description = "Study material retrieved", body = StudyMaterialResponse),
        (status = 404, description = "Study material not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Study materials"
)]
pub async fn get_study_material(
    Path(material_id): Path<i32>,
) -> Result<(StatusCode, Json<StudyMaterialResponse>), ApiError> {
    let material_repo = StudyMaterialRepository::new();

    let material = material_repo
        .find_by_id(material_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Study material not found".to_string()))?;

    let response = study_material_response(material, ExpandDepth::Related).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Update study material (full or partial)
#[utoipa::path(
    put,
    path = "/study-material/{material_id}/",
    params(
        ("material_id" = i32, Path, description = "Study material ID")
    ),
    request_body = UpdateStudyMaterialRequest,
    responses(
        (status = 200, description = "Study material updated", body = StudyMaterialResponse),
        (status = 404, description = "Study material not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Study materials"
)]
pub async fn update_study_material(
    Path(material_id): Path<i32>,
    Json(payload): Json<UpdateStudyMaterialRequest>,
) -> Result<(StatusCode, Json<StudyMaterialResponse>), ApiError> {
    let material_repo = StudyMaterialRepository::new();

    let updates = StudyMaterialUpdate {
        title: payload.title,
        description: payload.description,
        upload: payload.upload,
        remarks: payload.remarks,
    };

    let updated = material_repo
        .update(material_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Study material not found".to_string()))?;

    let response = study_material_response(updated, ExpandDepth::Flat).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete study material
#[utoipa::path(
    delete,
    path = "/study-material/{material_id}/",
    params(
        ("material_id" = i32, Path, description = "Study material ID")
    ),
    responses(
        (status = 204, description = "Study material deleted"),
        (status = 404, description = "Study material not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Study materials"
)]
pub async fn delete_study_material(Path(material_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let material_repo = StudyMaterialRepository::new();

    let deleted = material_repo.delete(material_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Study material not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
