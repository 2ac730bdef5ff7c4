use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::teacher;
use crate::routes::courses::dto::CourseBrief;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeacherRequest {
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,

    #[schema(example = "MSc Computer Science")]
    pub qualification: String,

    #[schema(example = "0912345678")]
    pub mobile_no: String,

    #[schema(example = "python,django,rest")]
    pub skills: String,

    pub profile_img: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTeacherRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// New password (optional) - will be hashed
    pub password: Option<String>,
    pub qualification: Option<String>,
    pub mobile_no: Option<String>,
    pub skills: Option<String>,
    pub profile_img: Option<String>,
}

/// Full teacher shape. The stored password never serializes.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub qualification: String,
    pub mobile_no: String,
    pub skills: String,
    pub skill_list: Vec<String>,
    pub profile_img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_courses: Option<Vec<CourseBrief>>,
}

/// Teacher shape nested inside other responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherBrief {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub qualification: String,
    pub mobile_no: String,
    pub skills: String,
    pub profile_img: Option<String>,
}

impl From<teacher::Model> for TeacherBrief {
    fn from(teacher: teacher::Model) -> Self {
        Self {
            id: teacher.id,
            full_name: teacher.full_name,
            email: teacher.email,
            qualification: teacher.qualification,
            mobile_no: teacher.mobile_no,
            skills: teacher.skills,
            profile_img: teacher.profile_img,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TeacherLoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherLoginResponse {
    #[serde(rename = "bool")]
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[schema(example = "newPassword123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherDashboardResponse {
    pub total_teacher_courses: i64,
    pub total_teacher_chapters: i64,
    pub total_teacher_students: i64,
}
