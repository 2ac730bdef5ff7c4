use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::chapter;
use crate::routes::courses::dto::CourseBrief;
use crate::serialize::Linked;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateChapterRequest {
    pub course: i32,

    #[schema(example = "Getting started")]
    pub title: String,

    pub description: String,
    pub video: Option<String>,
    pub remarks: Option<String>,
}

/// Create body for the course-scoped chapter path; the course id comes from
/// the path segment.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseChapterRequest {
    #[schema(example = "Getting started")]
    pub title: String,

    pub description: String,
    pub video: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateChapterRequest {
    pub course: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChapterResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub course: Linked<CourseBrief>,
    pub title: String,
    pub description: String,
    pub video: Option<String>,
    pub remarks: Option<String>,
}

/// Chapter shape nested inside a course response. The back-reference to the
/// course stays a raw id.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChapterBrief {
    pub id: i32,
    pub course: i32,
    pub title: String,
    pub description: String,
    pub video: Option<String>,
    pub remarks: Option<String>,
}

impl From<chapter::Model> for ChapterBrief {
    fn from(chapter: chapter::Model) -> Self {
        Self {
            id: chapter.id,
            course: chapter.course_id,
            title: chapter.title,
            description: chapter.description,
            video: chapter.video,
            remarks: chapter.remarks,
        }
    }
}
