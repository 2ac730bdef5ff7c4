use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routes::courses::dto::CourseBrief;
use crate::serialize::Linked;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudyMaterialRequest {
    pub course: i32,
    #[schema(example = "Week 1 slides")]
    pub title: String,
    pub description: String,
    pub upload: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudyMaterialRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub upload: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudyMaterialResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub course: Linked<CourseBrief>,
    pub title: String,
    pub description: String,
    pub upload: Option<String>,
    pub remarks: Option<String>,
}
