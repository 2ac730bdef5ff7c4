use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::routes::categories::dto::CategoryResponse;
use crate::routes::chapters::dto::ChapterBrief;
use crate::routes::teachers::dto::TeacherBrief;
use crate::serialize::Linked;

/// Optional selectors for the course collection. When several are present
/// the later-declared one wins (`skill_name`+`teacher` over `category` over
/// `result`).
#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseListQuery {
    /// Keep only the newest N courses.
    pub result: Option<u64>,
    /// Substring matched against course techs, case-insensitively.
    pub category: Option<String>,
    /// Teacher id as a string; combined with `teacher`, restricts to courses
    /// of that teacher whose techs contain the value.
    pub skill_name: Option<String>,
    /// Flag that activates the `skill_name` selector; its value is ignored.
    pub teacher: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub category: i32,
    pub teacher: i32,

    #[schema(example = "Python for beginners")]
    pub title: String,

    pub description: String,
    pub featured_img: Option<String>,

    #[schema(example = "python,django")]
    pub techs: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub category: Option<i32>,
    pub teacher: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub featured_img: Option<String>,
    pub techs: Option<String>,
}

/// Full course shape, including the derived fields recomputed on every read.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub category: Linked<CategoryResponse>,
    #[schema(value_type = Object)]
    pub teacher: Linked<TeacherBrief>,
    pub title: String,
    pub description: String,
    pub featured_img: Option<String>,
    pub techs: String,
    pub tech_list: Vec<String>,
    pub total_enrolled_students: i64,
    /// Average rating; null while the course has no ratings.
    pub course_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_chapters: Option<Vec<ChapterBrief>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_courses: Option<Vec<CourseBrief>>,
}

/// Course shape nested inside other responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseBrief {
    pub id: i32,
    #[schema(value_type = Object)]
    pub category: Linked<CategoryResponse>,
    #[schema(value_type = Object)]
    pub teacher: Linked<TeacherBrief>,
    pub title: String,
    pub description: String,
    pub featured_img: Option<String>,
    pub techs: String,
}
