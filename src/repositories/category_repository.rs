use std::sync::Arc;

use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::entities::course_category;
use crate::static_service::require_connection;

pub struct CategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<course_category::Model>> {
        let categories = course_category::Entity::find().all(self.db.as_ref()).await?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<course_category::Model>> {
        let category = course_category::Entity::find_by_id(category_id)
            .one(self.db.as_ref())
            .await?;
        Ok(category)
    }

    pub async fn create(&self, title: String, description: String) -> Result<course_category::Model> {
        let model = course_category::ActiveModel {
            title: Set(title),
            description: Set(description),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }
}
