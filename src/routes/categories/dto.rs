use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::course_category;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Programming")]
    pub title: String,

    #[schema(example = "Programming languages and frameworks")]
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<course_category::Model> for CategoryResponse {
    fn from(category: course_category::Model) -> Self {
        Self {
            id: category.id,
            title: category.title,
            description: category.description,
        }
    }
}
