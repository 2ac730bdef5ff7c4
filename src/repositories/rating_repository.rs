use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

use crate::entities::course_rating;
use crate::static_service::require_connection;

pub struct RatingRepository {
    db: Arc<DatabaseConnection>,
}

impl RatingRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<course_rating::Model>> {
        let ratings = course_rating::Entity::find().all(self.db.as_ref()).await?;
        Ok(ratings)
    }

    pub async fn create(
        &self,
        course_id: i32,
        student_id: i32,
        rating: i64,
        reviews: Option<String>,
    ) -> Result<course_rating::Model> {
        let model = course_rating::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            rating: Set(rating),
            reviews: Set(reviews),
            review_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn exists(&self, student_id: i32, course_id: i32) -> Result<bool> {
        let count = course_rating::Entity::find()
            .filter(course_rating::Column::StudentId.eq(student_id))
            .filter(course_rating::Column::CourseId.eq(course_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    /// None when the course has no ratings, duplicates all count.
    pub async fn average_for_course(&self, course_id: i32) -> Result<Option<f64>> {
        let ratings: Vec<i64> = course_rating::Entity::find()
            .select_only()
            .column(course_rating::Column::Rating)
            .filter(course_rating::Column::CourseId.eq(course_id))
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: i64 = ratings.iter().sum();
        Ok(Some(sum as f64 / ratings.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    #[tokio::test]
    async fn average_is_none_without_ratings() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<std::collections::BTreeMap<&str, Value>>::new()])
                .into_connection(),
        );

        let repo = RatingRepository::with_connection(db);
        assert_eq!(repo.average_for_course(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn average_covers_duplicate_raters() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![
                    btreemap! { "rating" => Value::BigInt(Some(4)) },
                    btreemap! { "rating" => Value::BigInt(Some(4)) },
                    btreemap! { "rating" => Value::BigInt(Some(1)) },
                ]])
                .into_connection(),
        );

        let repo = RatingRepository::with_connection(db);
        assert_eq!(repo.average_for_course(1).await.unwrap(), Some(3.0));
    }
}
