use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Set,
};

use crate::entities::{attempt_quiz, quiz_question};
use crate::static_service::require_connection;

pub struct AttemptRepository {
    db: Arc<DatabaseConnection>,
}

impl AttemptRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<attempt_quiz::Model>> {
        let attempts = attempt_quiz::Entity::find().all(self.db.as_ref()).await?;
        Ok(attempts)
    }

    pub async fn create(
        &self,
        student_id: i32,
        quiz_id: i32,
        question_id: i32,
        right_ans: Option<String>,
    ) -> Result<attempt_quiz::Model> {
        let model = attempt_quiz::ActiveModel {
            student_id: Set(student_id),
            quiz_id: Set(quiz_id),
            question_id: Set(question_id),
            right_ans: Set(right_ans),
            add_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    /// True iff the student answered at least one question belonging to the
    /// quiz. Resolved through the question join rather than the attempt's own
    /// quiz column.
    pub async fn attempted(&self, quiz_id: i32, student_id: i32) -> Result<bool> {
        let count = attempt_quiz::Entity::find()
            .join(JoinType::InnerJoin, attempt_quiz::Relation::Question.def())
            .filter(quiz_question::Column::QuizId.eq(quiz_id))
            .filter(attempt_quiz::Column::StudentId.eq(student_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    #[tokio::test]
    async fn attempted_joins_through_question() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    btreemap! { "num_items" => Value::BigInt(Some(1)) },
                ]])
                .into_connection(),
        );

        let repo = AttemptRepository::with_connection(db.clone());
        assert!(repo.attempted(3, 8).await.unwrap());

        drop(repo);
        let conn = Arc::try_unwrap(db).expect("repository still holds the connection");
        let sql = format!("{:?}", conn.into_transaction_log());
        assert!(sql.contains("JOIN"));
        assert!(sql.contains("quiz_question"));
    }

    #[tokio::test]
    async fn attempted_is_false_for_unrelated_pair() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    btreemap! { "num_items" => Value::BigInt(Some(0)) },
                ]])
                .into_connection(),
        );

        let repo = AttemptRepository::with_connection(db);
        assert!(!repo.attempted(3, 8).await.unwrap());
    }
}
