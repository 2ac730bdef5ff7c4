use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routes::courses::dto::CourseBrief;
use crate::routes::students::dto::StudentBrief;
use crate::serialize::Linked;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRatingRequest {
    pub course: i32,
    pub student: i32,

    #[schema(example = 4)]
    pub rating: i64,

    pub reviews: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub course: Linked<CourseBrief>,
    #[schema(value_type = Object)]
    pub student: Linked<StudentBrief>,
    pub rating: i64,
    pub reviews: Option<String>,
    pub review_time: NaiveDateTime,
}
