use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{
    AssignmentResponse, CreateAssignmentRequest, MyAssignmentCreateRequest,
    UpdateAssignmentRequest,
};
use crate::entities::student_assignment;
use crate::error::ApiError;
use crate::repositories::{
    AssignmentRepository, AssignmentUpdate, NotificationRepository, StudentRepository,
    TeacherRepository,
};
use crate::routes::students::route::student_link;
use crate::routes::teachers::route::teacher_link;
use crate::serialize::ExpandDepth;

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/student-assignment/{teacher_id}/{student_id}",
            get(list_assignments),
        )
        .route(
            "/student-assignment/{teacher_id}/{student_id}",
            post(create_assignment),
        )
        .route("/my-assignments/{student_id}", get(my_assignments))
        .route("/my-assignments/{student_id}", post(create_my_assignment))
        .route("/update-assignment/{assignment_id}", get(get_assignment))
        .route("/update-assignment/{assignment_id}", put(update_assignment))
        .route(
            "/update-assignment/{assignment_id}",
            patch(update_assignment),
        )
        .route(
            "/update-assignment/{assignment_id}",
            delete(delete_assignment),
        )
}

async fn assignment_response(
    assignment: student_assignment::Model,
    depth: ExpandDepth,
) -> Result<AssignmentResponse, ApiError> {
    let teacher = teacher_link(assignment.teacher_id, depth).await?;
    let student = student_link(assignment.student_id, depth).await?;

    Ok(AssignmentResponse {
        id: assignment.id,
        teacher,
        student,
        title: assignment.title,
        detail: assignment.detail,
        student_status: assignment.student_status,
        add_time: assignment.add_time,
    })
}

/// Assignments a teacher has given to a student
#[utoipa::path(
    get,
    path = "/student-assignment/{teacher_id}/{student_id}",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Assignments retrieved", body = [AssignmentResponse]),
        (status = 404, description = "Teacher or student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn list_assignments(
    Path((teacher_id, student_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<AssignmentResponse>>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let assignment_repo = AssignmentRepository::new();
    let assignments = assignment_repo
        .find_by_teacher_and_student(teacher_id, student_id)
        .await?;

    let mut response = Vec::new();
    for assignment in assignments {
        response.push(assignment_response(assignment, ExpandDepth::Deep).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Give an assignment to a student
#[utoipa::path(
    post,
    path = "/student-assignment/{teacher_id}/{student_id}",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentResponse),
        (status = 404, description = "Teacher or student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn create_assignment(
    Path((teacher_id, student_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let assignment_repo = AssignmentRepository::new();
    let assignment = assignment_repo
        .create(teacher_id, student_id, payload.title, payload.detail)
        .await?;

    let response = assignment_response(assignment, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// A student's own assignments. Listing marks the student's assignment
/// notifications read before the rows are fetched.
#[utoipa::path(
    get,
    path = "/my-assignments/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Assignments retrieved", body = [AssignmentResponse]),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn my_assignments(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<AssignmentResponse>>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let notification_repo = NotificationRepository::new();
    notification_repo.mark_assignment_read(student_id).await?;

    let assignment_repo = AssignmentRepository::new();
    let assignments = assignment_repo.find_by_student(student_id).await?;

    let mut response = Vec::new();
    for assignment in assignments {
        response.push(assignment_response(assignment, ExpandDepth::Deep).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Create an assignment for the student in the path
#[utoipa::path(
    post,
    path = "/my-assignments/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = MyAssignmentCreateRequest,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentResponse),
        (status = 400, description = "Referenced teacher does not exist"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn create_my_assignment(
    Path(student_id): Path<i32>,
    Json(payload): Json<MyAssignmentCreateRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let teacher_repo = TeacherRepository::new();
    if teacher_repo.find_by_id(payload.teacher).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Teacher {} does not exist",
            payload.teacher
        )));
    }

    let assignment_repo = AssignmentRepository::new();
    let assignment = assignment_repo
        .create(payload.teacher, student_id, payload.title, payload.detail)
        .await?;

    let response = assignment_response(assignment, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get assignment by ID
#[utoipa::path(
    get,
    path = "/update-assignment/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment retrieved", body = AssignmentResponse),
        (status = 404, description = "Assignment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn get_assignment(
    Path(assignment_id): Path<i32>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    let assignment_repo = AssignmentRepository::new();

    let assignment = assignment_repo
        .find_by_id(assignment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assignment not found".to_string()))?;

    let response = assignment_response(assignment, ExpandDepth::Deep).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Update assignment (full or partial); flipping student_status marks it done
#[utoipa::path(
    put,
    path = "/update-assignment/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment ID")
    ),
    request_body = UpdateAssignmentRequest,
    responses(
        (status = 200, description = "Assignment updated", body = AssignmentResponse),
        (status = 404, description = "Assignment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn update_assignment(
    Path(assignment_id): Path<i32>,
    Json(payload): Json<UpdateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    let assignment_repo = AssignmentRepository::new();

    let updates = AssignmentUpdate {
        title: payload.title,
        detail: payload.detail,
        student_status: payload.student_status,
    };

    let updated = assignment_repo
        .update(assignment_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assignment not found".to_string()))?;

    let response = assignment_response(updated, ExpandDepth::Flat).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete assignment
#[utoipa::path(
    delete,
    path = "/update-assignment/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn delete_assignment(Path(assignment_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let assignment_repo = AssignmentRepository::new();

    let deleted = assignment_repo.delete(assignment_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Assignment not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
