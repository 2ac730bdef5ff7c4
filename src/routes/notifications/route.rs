use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{CreateNotificationRequest, NotificationResponse};
use crate::error::ApiError;
use crate::repositories::{NotificationRepository, StudentRepository, TeacherRepository};

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/student/fetch-all-notifications/{student_id}/",
            get(list_student_notifications),
        )
        .route(
            "/student/fetch-all-notifications/{student_id}/",
            post(create_student_notification),
        )
        .route("/save-notification/", get(list_notifications))
        .route("/save-notification/", post(create_notification))
}

async fn check_referenced_parents(
    teacher: Option<i32>,
    student: Option<i32>,
) -> Result<(), ApiError> {
    if let Some(teacher_id) = teacher {
        let teacher_repo = TeacherRepository::new();
        if teacher_repo.find_by_id(teacher_id).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "Teacher {teacher_id} does not exist"
            )));
        }
    }

    if let Some(student_id) = student {
        let student_repo = StudentRepository::new();
        if student_repo.find_by_id(student_id).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "Student {student_id} does not exist"
            )));
        }
    }

    Ok(())
}

/// Unread assignment notifications addressed to a student
#[utoipa::path(
    get,
    path = "/student/fetch-all-notifications/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Notifications retrieved", body = [NotificationResponse]),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn list_student_notifications(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<NotificationResponse>>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let notification_repo = NotificationRepository::new();
    let notifications = notification_repo
        .unread_assignment_for_student(student_id)
        .await?;

    let response = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Create a notification addressed to the student in the path
#[utoipa::path(
    post,
    path = "/student/fetch-all-notifications/{student_id}/",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = NotificationResponse),
        (status = 400, description = "Referenced teacher does not exist"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn create_student_notification(
    Path(student_id): Path<i32>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    check_referenced_parents(payload.teacher, None).await?;

    // The path decides who the notification is for, not the body.
    let notification_repo = NotificationRepository::new();
    let notification = notification_repo
        .create(
            payload.teacher,
            Some(student_id),
            payload.notif_subject,
            payload.notif_for,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationResponse::from(notification)),
    ))
}

/// List all notifications
#[utoipa::path(
    get,
    path = "/save-notification/",
    responses(
        (status = 200, description = "Notifications retrieved", body = [NotificationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn list_notifications()
-> Result<(StatusCode, Json<Vec<NotificationResponse>>), ApiError> {
    let notification_repo = NotificationRepository::new();
    let notifications = notification_repo.find_all().await?;

    let response = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Create notification
#[utoipa::path(
    post,
    path = "/save-notification/",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = NotificationResponse),
        (status = 400, description = "Referenced teacher or student does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn create_notification(
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), ApiError> {
    check_referenced_parents(payload.teacher, payload.student).await?;

    let notification_repo = NotificationRepository::new();
    let notification = notification_repo
        .create(
            payload.teacher,
            payload.student,
            payload.notif_subject,
            payload.notif_for,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationResponse::from(notification)),
    ))
}
