use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

use crate::entities::student_favourite_course;
use crate::static_service::require_connection;

pub struct FavouriteRepository {
    db: Arc<DatabaseConnection>,
}

impl FavouriteRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<student_favourite_course::Model>> {
        let favourites = student_favourite_course::Entity::find()
            .all(self.db.as_ref())
            .await?;
        Ok(favourites)
    }

    pub async fn create(
        &self,
        course_id: i32,
        student_id: i32,
        status: bool,
    ) -> Result<student_favourite_course::Model> {
        let model = student_favourite_course::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            status: Set(status),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn find_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<student_favourite_course::Model>> {
        let favourites = student_favourite_course::Entity::find()
            .filter(student_favourite_course::Column::StudentId.eq(student_id))
            .distinct()
            .all(self.db.as_ref())
            .await?;
        Ok(favourites)
    }

    pub async fn exists(&self, student_id: i32, course_id: i32) -> Result<bool> {
        let favourite = student_favourite_course::Entity::find()
            .filter(student_favourite_course::Column::StudentId.eq(student_id))
            .filter(student_favourite_course::Column::CourseId.eq(course_id))
            .one(self.db.as_ref())
            .await?;
        Ok(favourite.is_some())
    }

    /// Deletes every favourite row for the pair. True iff at least one row
    /// went away, so a repeat call reports false.
    pub async fn remove(&self, student_id: i32, course_id: i32) -> Result<bool> {
        let result = student_favourite_course::Entity::delete_many()
            .filter(student_favourite_course::Column::StudentId.eq(student_id))
            .filter(student_favourite_course::Column::CourseId.eq(course_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count_by_student(&self, student_id: i32) -> Result<u64> {
        let count = student_favourite_course::Entity::find()
            .filter(student_favourite_course::Column::StudentId.eq(student_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn remove_reports_true_then_false() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 1,
                    },
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 0,
                    },
                ])
                .into_connection(),
        );

        let repo = FavouriteRepository::with_connection(db);
        assert!(repo.remove(1, 2).await.unwrap());
        assert!(!repo.remove(1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn exists_uses_point_lookup() {
        let favourite = student_favourite_course::Model {
            id: 1,
            course_id: 2,
            student_id: 3,
            status: true,
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[favourite]])
                .into_connection(),
        );

        let repo = FavouriteRepository::with_connection(db);
        assert!(repo.exists(3, 2).await.unwrap());
    }
}
