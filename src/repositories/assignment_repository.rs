use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::entities::student_assignment;
use crate::static_service::require_connection;

pub struct AssignmentRepository {
    db: Arc<DatabaseConnection>,
}

impl AssignmentRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_teacher_and_student(
        &self,
        teacher_id: i32,
        student_id: i32,
    ) -> Result<Vec<student_assignment::Model>> {
        let assignments = student_assignment::Entity::find()
            .filter(student_assignment::Column::TeacherId.eq(teacher_id))
            .filter(student_assignment::Column::StudentId.eq(student_id))
            .all(self.db.as_ref())
            .await?;
        Ok(assignments)
    }

    pub async fn find_by_student(&self, student_id: i32) -> Result<Vec<student_assignment::Model>> {
        let assignments = student_assignment::Entity::find()
            .filter(student_assignment::Column::StudentId.eq(student_id))
            .all(self.db.as_ref())
            .await?;
        Ok(assignments)
    }

    pub async fn find_by_id(&self, assignment_id: i32) -> Result<Option<student_assignment::Model>> {
        let assignment = student_assignment::Entity::find_by_id(assignment_id)
            .one(self.db.as_ref())
            .await?;
        Ok(assignment)
    }

    pub async fn create(
        &self,
        teacher_id: i32,
        student_id: i32,
        title: String,
        detail: Option<String>,
    ) -> Result<student_assignment::Model> {
        let model = student_assignment::ActiveModel {
            teacher_id: Set(teacher_id),
            student_id: Set(student_id),
            title: Set(title),
            detail: Set(detail),
            student_status: Set(false),
            add_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        assignment_id: i32,
        updates: AssignmentUpdate,
    ) -> Result<Option<student_assignment::Model>> {
        let Some(assignment) = self.find_by_id(assignment_id).await? else {
            return Ok(None);
        };

        let mut active_assignment: student_assignment::ActiveModel = assignment.into();

        if let Some(title) = updates.title {
            active_assignment.title = Set(title);
        }
        if let Some(detail) = updates.detail {
            active_assignment.detail = Set(Some(detail));
        }
        if let Some(student_status) = updates.student_status {
            active_assignment.student_status = Set(student_status);
        }

        let result = active_assignment.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, assignment_id: i32) -> Result<bool> {
        let result = student_assignment::Entity::delete_by_id(assignment_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count_complete(&self, student_id: i32) -> Result<u64> {
        let count = student_assignment::Entity::find()
            .filter(student_assignment::Column::StudentId.eq(student_id))
            .filter(student_assignment::Column::StudentStatus.eq(true))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    pub async fn count_pending(&self, student_id: i32) -> Result<u64> {
        let count = student_assignment::Entity::find()
            .filter(student_assignment::Column::StudentId.eq(student_id))
            .filter(student_assignment::Column::StudentStatus.eq(false))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}

#[derive(Default)]
pub struct AssignmentUpdate {
    pub title: Option<String>,
    pub detail: Option<String>,
    pub student_status: Option<bool>,
}
