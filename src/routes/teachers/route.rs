use axum::{
    Form, Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{
    ChangePasswordRequest, CreateTeacherRequest, TeacherBrief, TeacherDashboardResponse,
    TeacherLoginRequest, TeacherLoginResponse, TeacherResponse, UpdateTeacherRequest,
};
use crate::entities::teacher;
use crate::error::ApiError;
use crate::repositories::{
    ChapterRepository, CourseRepository, EnrollmentRepository, TeacherRepository, TeacherUpdate,
};
use crate::routes::courses::dto::CourseBrief;
use crate::routes::courses::route::course_brief;
use crate::serialize::{ExpandDepth, Linked, StatusResponse};
use crate::utils::tags::split_tags;

pub fn create_route() -> Router {
    Router::new()
        .route("/teacher/", get(list_teachers))
        .route("/teacher/", post(create_teacher))
        .route("/teacher/dashboard/{teacher_id}/", get(teacher_dashboard))
        .route("/teacher/{teacher_id}/", get(get_teacher))
        .route("/teacher/{teacher_id}/", put(update_teacher))
        .route("/teacher/{teacher_id}/", patch(update_teacher))
        .route("/teacher/{teacher_id}/", delete(delete_teacher))
        .route(
            "/teacher-change-password/{teacher_id}/",
            post(teacher_change_password),
        )
        .route("/teacher-login", post(teacher_login))
}

/// Renders a teacher foreign key as either the raw id or the full object.
pub(crate) async fn teacher_link(
    teacher_id: i32,
    depth: ExpandDepth,
) -> Result<Linked<TeacherBrief>, ApiError> {
    if !depth.expands() {
        return Ok(Linked::Id(teacher_id));
    }

    let teacher_repo = TeacherRepository::new();
    match teacher_repo.find_by_id(teacher_id).await? {
        Some(teacher) => Ok(Linked::Full(Box::new(TeacherBrief::from(teacher)))),
        None => Ok(Linked::Id(teacher_id)),
    }
}

fn teacher_response(
    teacher: teacher::Model,
    teacher_courses: Option<Vec<CourseBrief>>,
) -> TeacherResponse {
    TeacherResponse {
        id: teacher.id,
        full_name: teacher.full_name,
        email: teacher.email,
        qualification: teacher.qualification,
        mobile_no: teacher.mobile_no,
        skill_list: split_tags(&teacher.skills),
        skills: teacher.skills,
        profile_img: teacher.profile_img,
        teacher_courses,
    }
}

/// List all teachers
#[utoipa::path(
    get,
    path = "/teacher/",
    responses(
        (status = 200, description = "Teachers retrieved", body = [TeacherResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn list_teachers() -> Result<(StatusCode, Json<Vec<TeacherResponse>>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    let teachers = teacher_repo.find_all().await?;
    let response: Vec<TeacherResponse> = teachers
        .into_iter()
        .map(|teacher| teacher_response(teacher, None))
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Register a teacher
#[utoipa::path(
    post,
    path = "/teacher/",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher created", body = TeacherResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn create_teacher(
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    let teacher = teacher_repo
        .create(
            payload.full_name,
            payload.email,
            payload.password,
            payload.qualification,
            payload.mobile_no,
            payload.skills,
            payload.profile_img,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(teacher_response(teacher, None))))
}

/// Get teacher by ID, with the courses the teacher owns
#[utoipa::path(
    get,
    path = "/teacher/{teacher_id}/",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher retrieved", body = TeacherResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teacher(
    Path(teacher_id): Path<i32>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    let teacher = teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let course_repo = CourseRepository::new();
    let courses = course_repo.find_by_teacher(teacher_id).await?;

    let mut teacher_courses = Vec::new();
    for course in courses {
        teacher_courses.push(course_brief(course, ExpandDepth::Flat).await?);
    }

    Ok((
        StatusCode::OK,
        Json(teacher_response(teacher, Some(teacher_courses))),
    ))
}

/// Update teacher (full or partial)
#[utoipa::path(
    put,
    path = "/teacher/{teacher_id}/",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Teacher updated", body = TeacherResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn update_teacher(
    Path(teacher_id): Path<i32>,
    Json(payload): Json<UpdateTeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    let updates = TeacherUpdate {
        full_name: payload.full_name,
        email: payload.email,
        password: payload.password,
        qualification: payload.qualification,
        mobile_no: payload.mobile_no,
        skills: payload.skills,
        profile_img: payload.profile_img,
    };

    let updated = teacher_repo
        .update(teacher_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    Ok((StatusCode::OK, Json(teacher_response(updated, None))))
}

/// Delete teacher
#[utoipa::path(
    delete,
    path = "/teacher/{teacher_id}/",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn delete_teacher(Path(teacher_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let teacher_repo = TeacherRepository::new();

    let deleted = teacher_repo.delete(teacher_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Teacher not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Teacher dashboard counts
#[utoipa::path(
    get,
    path = "/teacher/dashboard/{teacher_id}/",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Dashboard counts", body = TeacherDashboardResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn teacher_dashboard(
    Path(teacher_id): Path<i32>,
) -> Result<(StatusCode, Json<TeacherDashboardResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let total_teacher_courses =
        CourseRepository::new().count_by_teacher(teacher_id).await? as i64;
    let total_teacher_chapters =
        ChapterRepository::new().count_by_teacher(teacher_id).await? as i64;
    let total_teacher_students = EnrollmentRepository::new()
        .count_distinct_students_by_teacher(teacher_id)
        .await? as i64;

    Ok((
        StatusCode::OK,
        Json(TeacherDashboardResponse {
            total_teacher_courses,
            total_teacher_chapters,
            total_teacher_students,
        }),
    ))
}

/// Teacher login. Always answers 200; a failed check is `{"bool": false}`
/// with no hint whether the email or the password was wrong.
#[utoipa::path(
    post,
    path = "/teacher-login",
    request_body(content = TeacherLoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login outcome", body = TeacherLoginResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn teacher_login(
    Form(payload): Form<TeacherLoginRequest>,
) -> Result<(StatusCode, Json<TeacherLoginResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    let teacher = teacher_repo
        .verify_login(&payload.email, &payload.password)
        .await?;

    let response = TeacherLoginResponse {
        status: teacher.is_some(),
        teacher_id: teacher.map(|teacher| teacher.id),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Change teacher password. An unknown teacher id answers `{"bool": false}`.
#[utoipa::path(
    post,
    path = "/teacher-change-password/{teacher_id}/",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    request_body(content = ChangePasswordRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Change outcome", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn teacher_change_password(
    Path(teacher_id): Path<i32>,
    Form(payload): Form<ChangePasswordRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();

    let changed = teacher_repo
        .change_password(teacher_id, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(StatusResponse::new(changed))))
}
