use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::entities::{course_quiz, quiz};
use crate::static_service::require_connection;

pub struct QuizRepository {
    db: Arc<DatabaseConnection>,
}

impl QuizRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<quiz::Model>> {
        let quizzes = quiz::Entity::find().all(self.db.as_ref()).await?;
        Ok(quizzes)
    }

    pub async fn find_by_id(&self, quiz_id: i32) -> Result<Option<quiz::Model>> {
        let quiz = quiz::Entity::find_by_id(quiz_id).one(self.db.as_ref()).await?;
        Ok(quiz)
    }

    pub async fn find_by_teacher(&self, teacher_id: i32) -> Result<Vec<quiz::Model>> {
        let quizzes = quiz::Entity::find()
            .filter(quiz::Column::TeacherId.eq(teacher_id))
            .all(self.db.as_ref())
            .await?;
        Ok(quizzes)
    }

    pub async fn create(&self, teacher_id: i32, title: String, detail: String) -> Result<quiz::Model> {
        let model = quiz::ActiveModel {
            teacher_id: Set(teacher_id),
            title: Set(title),
            detail: Set(detail),
            add_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(&self, quiz_id: i32, updates: QuizUpdate) -> Result<Option<quiz::Model>> {
        let Some(quiz) = self.find_by_id(quiz_id).await? else {
            return Ok(None);
        };

        let mut active_quiz: quiz::ActiveModel = quiz.into();

        if let Some(teacher_id) = updates.teacher_id {
            active_quiz.teacher_id = Set(teacher_id);
        }
        if let Some(title) = updates.title {
            active_quiz.title = Set(title);
        }
        if let Some(detail) = updates.detail {
            active_quiz.detail = Set(detail);
        }

        let result = active_quiz.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, quiz_id: i32) -> Result<bool> {
        let result = quiz::Entity::delete_by_id(quiz_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// How many courses the quiz is currently assigned to.
    pub async fn assign_count(&self, quiz_id: i32) -> Result<u64> {
        let count = course_quiz::Entity::find()
            .filter(course_quiz::Column::QuizId.eq(quiz_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}

#[derive(Default)]
pub struct QuizUpdate {
    pub teacher_id: Option<i32>,
    pub title: Option<String>,
    pub detail: Option<String>,
}
