use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routes::students::dto::StudentBrief;
use crate::routes::teachers::dto::TeacherBrief;
use crate::serialize::Linked;

/// Create body for the teacher+student scoped path; both ids come from the
/// path segments.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssignmentRequest {
    #[schema(example = "Build a REST API")]
    pub title: String,

    pub detail: Option<String>,
}

/// Create body for the student-scoped path; the teacher rides in the body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MyAssignmentCreateRequest {
    pub teacher: i32,

    #[schema(example = "Build a REST API")]
    pub title: String,

    pub detail: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub detail: Option<String>,
    pub student_status: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub teacher: Linked<TeacherBrief>,
    #[schema(value_type = Object)]
    pub student: Linked<StudentBrief>,
    pub title: String,
    pub detail: Option<String>,
    pub student_status: bool,
    pub add_time: NaiveDateTime,
}
