use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Set,
};

use crate::entities::{course, student_course_enrollment};
use crate::static_service::require_connection;

pub struct EnrollmentRepository {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<student_course_enrollment::Model>> {
        let enrollments = student_course_enrollment::Entity::find()
            .all(self.db.as_ref())
            .await?;
        Ok(enrollments)
    }

    pub async fn create(
        &self,
        course_id: i32,
        student_id: i32,
    ) -> Result<student_course_enrollment::Model> {
        let model = student_course_enrollment::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            enrolled_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn find_by_course(
        &self,
        course_id: i32,
    ) -> Result<Vec<student_course_enrollment::Model>> {
        let enrollments = student_course_enrollment::Entity::find()
            .filter(student_course_enrollment::Column::CourseId.eq(course_id))
            .all(self.db.as_ref())
            .await?;
        Ok(enrollments)
    }

    pub async fn find_by_teacher(
        &self,
        teacher_id: i32,
    ) -> Result<Vec<student_course_enrollment::Model>> {
        let enrollments = student_course_enrollment::Entity::find()
            .join(
                JoinType::InnerJoin,
                student_course_enrollment::Relation::Course.def(),
            )
            .filter(course::Column::TeacherId.eq(teacher_id))
            .distinct()
            .all(self.db.as_ref())
            .await?;
        Ok(enrollments)
    }

    pub async fn find_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<student_course_enrollment::Model>> {
        let enrollments = student_course_enrollment::Entity::find()
            .filter(student_course_enrollment::Column::StudentId.eq(student_id))
            .distinct()
            .all(self.db.as_ref())
            .await?;
        Ok(enrollments)
    }

    pub async fn exists(&self, student_id: i32, course_id: i32) -> Result<bool> {
        let count = student_course_enrollment::Entity::find()
            .filter(student_course_enrollment::Column::StudentId.eq(student_id))
            .filter(student_course_enrollment::Column::CourseId.eq(course_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    pub async fn count_by_course(&self, course_id: i32) -> Result<u64> {
        let count = student_course_enrollment::Entity::find()
            .filter(student_course_enrollment::Column::CourseId.eq(course_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    pub async fn count_by_student(&self, student_id: i32) -> Result<u64> {
        let count = student_course_enrollment::Entity::find()
            .filter(student_course_enrollment::Column::StudentId.eq(student_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    /// Distinct students across every course the teacher owns. Duplicate
    /// enrollment rows for the same student count once.
    pub async fn count_distinct_students_by_teacher(&self, teacher_id: i32) -> Result<u64> {
        let student_ids: Vec<i32> = student_course_enrollment::Entity::find()
            .select_only()
            .column(student_course_enrollment::Column::StudentId)
            .join(
                JoinType::InnerJoin,
                student_course_enrollment::Relation::Course.def(),
            )
            .filter(course::Column::TeacherId.eq(teacher_id))
            .distinct()
            .into_tuple()
            .all(self.db.as_ref())
            .await?;
        Ok(student_ids.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    #[tokio::test]
    async fn exists_is_true_when_a_row_matches() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    btreemap! { "num_items" => Value::BigInt(Some(1)) },
                ]])
                .into_connection(),
        );

        let repo = EnrollmentRepository::with_connection(db);
        assert!(repo.exists(1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn exists_is_false_on_zero_matches() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    btreemap! { "num_items" => Value::BigInt(Some(0)) },
                ]])
                .into_connection(),
        );

        let repo = EnrollmentRepository::with_connection(db);
        assert!(!repo.exists(1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn count_distinct_students_deduplicates_rows() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![
                    btreemap! { "student_id" => Value::Int(Some(4)) },
                    btreemap! { "student_id" => Value::Int(Some(9)) },
                ]])
                .into_connection(),
        );

        let repo = EnrollmentRepository::with_connection(db.clone());
        let count = repo.count_distinct_students_by_teacher(1).await.unwrap();
        assert_eq!(count, 2);

        drop(repo);
        let conn = Arc::try_unwrap(db).expect("repository still holds the connection");
        let sql = format!("{:?}", conn.into_transaction_log());
        assert!(sql.contains("DISTINCT"));
    }
}
