use axum::{
    Form, Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{
    CreateStudentRequest, StudentBrief, StudentDashboardResponse, StudentLoginRequest,
    StudentLoginResponse, StudentResponse, UpdateStudentRequest,
};
use crate::entities::student;
use crate::error::ApiError;
use crate::repositories::{
    AssignmentRepository, EnrollmentRepository, FavouriteRepository, StudentRepository,
    StudentUpdate,
};
use crate::routes::teachers::dto::ChangePasswordRequest;
use crate::serialize::{ExpandDepth, Linked, StatusResponse};
use crate::utils::tags::split_tags;

pub fn create_route() -> Router {
    Router::new()
        .route("/student/", get(list_students))
        .route("/student/", post(create_student))
        .route("/student/dashboard/{student_id}/", get(student_dashboard))
        .route("/student/{student_id}/", get(get_student))
        .route("/student/{student_id}/", put(update_student))
        .route("/student/{student_id}/", patch(update_student))
        .route("/student/{student_id}/", delete(delete_student))
        .route(
            "/student-change-password/{student_id}/",
            post(student_change_password),
        )
        .route("/student-login", post(student_login))
}

/// Renders a student foreign key as either the raw id or the full object.
pub(crate) async fn student_link(
    student_id: i32,
    depth: ExpandDepth,
) -> Result<Linked<StudentBrief>, ApiError> {
    if !depth.expands() {
        return Ok(Linked::Id(student_id));
    }

    let student_repo = StudentRepository::new();
    match student_repo.find_by_id(student_id).await? {
        Some(student) => Ok(Linked::Full(Box::new(StudentBrief::from(student)))),
        None => Ok(Linked::Id(student_id)),
    }
}

fn student_response(student: student::Model) -> StudentResponse {
    StudentResponse {
        id: student.id,
        full_name: student.full_name,
        email: student.email,
        username: student.username,
        interest_list: split_tags(&student.interested_categories),
        interested_categories: student.interested_categories,
        profile_img: student.profile_img,
    }
}

/// List all students
#[utoipa::path(
    get,
    path = "/student/",
    responses(
        (status = 200, description = "Students retrieved", body = [StudentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn list_students() -> Result<(StatusCode, Json<Vec<StudentResponse>>), ApiError> {
    let student_repo = StudentRepository::new();

    let students = student_repo.find_all().await?;
    let response: Vec<StudentResponse> = students.into_iter().map(student_response).collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/student/",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn create_student(
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student_repo = StudentRepository::new();

    let student = student_repo
        .create(
            payload.full_name,
            payload.email,
            payload.password,
            payload.username,
            payload.interested_categories,
            payload.profile_img,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(student_response(student))))
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/student/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student retrieved", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_student(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student_repo = StudentRepository::new();

    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student_response(student))))
}

/// Update student (full or partial)
#[utoipa::path(
    put,
    path = "/student/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn update_student(
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student_repo = StudentRepository::new();

    let updates = StudentUpdate {
        full_name: payload.full_name,
        email: payload.email,
        password: payload.password,
        username: payload.username,
        interested_categories: payload.interested_categories,
        profile_img: payload.profile_img,
    };

    let updated = student_repo
        .update(student_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student_response(updated))))
}

/// Delete student
#[utoipa::path(
    delete,
    path = "/student/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn delete_student(Path(student_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let student_repo = StudentRepository::new();

    let deleted = student_repo.delete(student_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Student dashboard counts
#[utoipa::path(
    get,
    path = "/student/dashboard/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Dashboard counts", body = StudentDashboardResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn student_dashboard(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<StudentDashboardResponse>), ApiError> {
    let student_repo = StudentRepository::new();

    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let enrolled_courses = EnrollmentRepository::new().count_by_student(student_id).await? as i64;
    let favourite_courses = FavouriteRepository::new().count_by_student(student_id).await? as i64;

    let assignment_repo = AssignmentRepository::new();
    let complete_assignments = assignment_repo.count_complete(student_id).await? as i64;
    let pending_assignments = assignment_repo.count_pending(student_id).await? as i64;

    Ok((
        StatusCode::OK,
        Json(StudentDashboardResponse {
            enrolled_courses,
            favourite_courses,
            complete_assignments,
            pending_assignments,
        }),
    ))
}

/// Student login. Always answers 200; a failed check is `{"bool": false}`
/// with no hint whether the email or the password was wrong.
#[utoipa::path(
    post,
    path = "/student-login",
    request_body(content = StudentLoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login outcome", body = StudentLoginResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn student_login(
    Form(payload): Form<StudentLoginRequest>,
) -> Result<(StatusCode, Json<StudentLoginResponse>), ApiError> {
    let student_repo = StudentRepository::new();

    let student = student_repo
        .verify_login(&payload.email, &payload.password)
        .await?;

    let response = StudentLoginResponse {
        status: student.is_some(),
        student_id: student.map(|student| student.id),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Change student password. An unknown student id answers `{"bool": false}`.
#[utoipa::path(
    post,
    path = "/student-change-password/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body(content = ChangePasswordRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Change outcome", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn student_change_password(
    Path(student_id): Path<i32>,
    Form(payload): Form<ChangePasswordRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let student_repo = StudentRepository::new();

    let changed = student_repo
        .change_password(student_id, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(StatusResponse::new(changed))))
}
