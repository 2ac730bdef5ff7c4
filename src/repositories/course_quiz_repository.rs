use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::entities::course_quiz;
use crate::static_service::require_connection;

pub struct CourseQuizRepository {
    db: Arc<DatabaseConnection>,
}

impl CourseQuizRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<course_quiz::Model>> {
        let assignments = course_quiz::Entity::find().all(self.db.as_ref()).await?;
        Ok(assignments)
    }

    pub async fn find_by_course(&self, course_id: i32) -> Result<Vec<course_quiz::Model>> {
        let assignments = course_quiz::Entity::find()
            .filter(course_quiz::Column::CourseId.eq(course_id))
            .all(self.db.as_ref())
            .await?;
        Ok(assignments)
    }

    pub async fn create(
        &self,
        teacher_id: i32,
        course_id: i32,
        quiz_id: i32,
    ) -> Result<course_quiz::Model> {
        let model = course_quiz::ActiveModel {
            teacher_id: Set(teacher_id),
            course_id: Set(course_id),
            quiz_id: Set(quiz_id),
            add_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn assign_exists(&self, quiz_id: i32, course_id: i32) -> Result<bool> {
        let count = course_quiz::Entity::find()
            .filter(course_quiz::Column::QuizId.eq(quiz_id))
            .filter(course_quiz::Column::CourseId.eq(course_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }
}
