use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{CreateEnrollmentRequest, EnrollmentResponse};
use crate::entities::student_course_enrollment;
use crate::error::ApiError;
use crate::repositories::{
    CourseRepository, EnrollmentRepository, StudentRepository, TeacherRepository,
};
use crate::routes::courses::route::course_link;
use crate::routes::students::route::student_link;
use crate::serialize::{ExpandDepth, StatusResponse};

pub fn create_route() -> Router {
    Router::new()
        .route("/student-enroll-course/", get(list_enrollments))
        .route("/student-enroll-course/", post(enroll_student))
        .route(
            "/fetch-enroll-status/{student_id}/{course_id}",
            get(enroll_status),
        )
        .route(
            "/fetch-all-enrolled-students/{teacher_id}",
            get(enrolled_students_by_teacher),
        )
        .route(
            "/fetch-enrolled-students/{course_id}",
            get(enrolled_students_by_course),
        )
        .route(
            "/fetch-enrolled-courses/{student_id}",
            get(enrolled_courses),
        )
}

async fn enrollment_response(
    enrollment: student_course_enrollment::Model,
    depth: ExpandDepth,
) -> Result<EnrollmentResponse, ApiError> {
    let course = course_link(enrollment.course_id, depth).await?;
    let student = student_link(enrollment.student_id, depth).await?;

    Ok(EnrollmentResponse {
        id: enrollment.id,
        course,
        student,
        enrolled_time: enrollment.enrolled_time,
    })
}

async fn enrollment_list_response(
    enrollments: Vec<student_course_enrollment::Model>,
) -> Result<Vec<EnrollmentResponse>, ApiError> {
    let mut response = Vec::new();
    for enrollment in enrollments {
        response.push(enrollment_response(enrollment, ExpandDepth::Deep).await?);
    }
    Ok(response)
}

/// List all enrollments
#[utoipa::path(
    get,
    path = "/student-enroll-course/",
    responses(
        (status = 200, description = "Enrollments retrieved", body = [EnrollmentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn list_enrollments() -> Result<(StatusCode, Json<Vec<EnrollmentResponse>>), ApiError> {
    let enrollment_repo = EnrollmentRepository::new();
    let enrollments = enrollment_repo.find_all().await?;

    let response = enrollment_list_response(enrollments).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Enroll a student in a course. Duplicate enrollments are allowed.
#[utoipa::path(
    post,
    path = "/student-enroll-course/",
    request_body = CreateEnrollmentRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 400, description = "Referenced course or student does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn enroll_student(
    Json(payload): Json<CreateEnrollmentRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
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

    let enrollment_repo = EnrollmentRepository::new();
    let enrollment = enrollment_repo
        .create(payload.course, payload.student)
        .await?;

    let response = enrollment_response(enrollment, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Whether the student is enrolled in the course. Unknown ids answer
/// `{"bool": false}`, never an error.
#[utoipa::path(
    get,
    path = "/fetch-enroll-status/{student_id}/{course_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollment status", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn enroll_status(
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let enrollment_repo = EnrollmentRepository::new();
    let enrolled = enrollment_repo.exists(student_id, course_id).await?;

    Ok((StatusCode::OK, Json(StatusResponse::new(enrolled))))
}

/// Enrollments across all courses of a teacher, one row per distinct pairing
#[utoipa::path(
    get,
    path = "/fetch-all-enrolled-students/{teacher_id}",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Enrollments for the teacher's courses", body = [EnrollmentResponse]),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn enrolled_students_by_teacher(
    Path(teacher_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<EnrollmentResponse>>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let enrollment_repo = EnrollmentRepository::new();
    let enrollments = enrollment_repo.find_by_teacher(teacher_id).await?;

    let response = enrollment_list_response(enrollments).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Enrollments of a single course
#[utoipa::path(
    get,
    path = "/fetch-enrolled-students/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollments of the course", body = [EnrollmentResponse]),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn enrolled_students_by_course(
    Path(course_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<EnrollmentResponse>>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let enrollment_repo = EnrollmentRepository::new();
    let enrollments = enrollment_repo.find_by_course(course_id).await?;

    let response = enrollment_list_response(enrollments).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Courses a student is enrolled in
#[utoipa::path(
    get,
    path = "/fetch-enrolled-courses/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Enrollments of the student", body = [EnrollmentResponse]),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn enrolled_courses(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<EnrollmentResponse>>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let enrollment_repo = EnrollmentRepository::new();
    let enrollments = enrollment_repo.find_by_student(student_id).await?;

    let response = enrollment_list_response(enrollments).await?;

    Ok((StatusCode::OK, Json(response)))
}
