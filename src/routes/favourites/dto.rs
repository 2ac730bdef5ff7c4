use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routes::courses::dto::CourseBrief;
use crate::routes::students::dto::StudentBrief;
use crate::serialize::Linked;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFavouriteRequest {
    pub course: i32,
    pub student: i32,
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavouriteResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub course: Linked<CourseBrief>,
    #[schema(value_type = Object)]
    pub student: Linked<StudentBrief>,
    pub status: bool,
}
