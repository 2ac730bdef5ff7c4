use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::notification;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotificationRequest {
    pub student: Option<i32>,
    pub teacher: Option<i32>,
    #[schema(example = "assignment")]
    pub notif_subject: Option<String>,
    #[schema(example = "student")]
    pub notif_for: String,
}

/// Notifications always render their foreign keys as raw ids and carry no id
/// of their own.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub student: Option<i32>,
    pub teacher: Option<i32>,
    pub notif_subject: Option<String>,
    pub notif_for: String,
    pub notif_created_time: NaiveDateTime,
    pub notifread_status: bool,
}

impl From<notification::Model> for NotificationResponse {
    fn from(notification: notification::Model) -> Self {
        Self {
            student: notification.student_id,
            teacher: notification.teacher_id,
            notif_subject: notification.notif_subject,
            notif_for: notification.notif_for,
            notif_created_time: notification.notif_created_time,
            notifread_status: notification.notifread_status,
        }
    }
}
