use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::student;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    #[schema(example = "Grace Hopper")]
    pub full_name: String,

    #[schema(example = "grace@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,

    #[schema(example = "grace")]
    pub username: String,

    #[schema(example = "python,data science")]
    pub interested_categories: String,

    pub profile_img: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// New password (optional) - will be hashed
    pub password: Option<String>,
    pub username: Option<String>,
    pub interested_categories: Option<String>,
    pub profile_img: Option<String>,
}

/// Full student shape. The stored password never serializes.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub interested_categories: String,
    pub interest_list: Vec<String>,
    pub profile_img: Option<String>,
}

/// Student shape nested inside other responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentBrief {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub interested_categories: String,
    pub profile_img: Option<String>,
}

impl From<student::Model> for StudentBrief {
    fn from(student: student::Model) -> Self {
        Self {
            id: student.id,
            full_name: student.full_name,
            email: student.email,
            username: student.username,
            interested_categories: student.interested_categories,
            profile_img: student.profile_img,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentLoginRequest {
    #[schema(example = "grace@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentLoginResponse {
    #[serde(rename = "bool")]
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDashboardResponse {
    pub enrolled_courses: i64,
    pub favourite_courses: i64,
    pub complete_assignments: i64,
    pub pending_assignments: i64,
}
