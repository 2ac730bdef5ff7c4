use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::quiz_question;
use crate::static_service::require_connection;

/// Which slice of a quiz's questions to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSelector {
    /// Every question of the quiz.
    All,
    /// Only the first question, ascending id.
    FirstOnly,
    /// The next question after the given id, pagination cursor style.
    After(i32),
}

pub struct QuestionRepository {
    db: Arc<DatabaseConnection>,
}

impl QuestionRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_quiz(
        &self,
        quiz_id: i32,
        selector: QuestionSelector,
    ) -> Result<Vec<quiz_question::Model>> {
        let mut query =
            quiz_question::Entity::find().filter(quiz_question::Column::QuizId.eq(quiz_id));

        match selector {
            QuestionSelector::All => {}
            QuestionSelector::FirstOnly => {
                query = query.order_by_asc(quiz_question::Column::Id).limit(1);
            }
            QuestionSelector::After(question_id) => {
                query = query
                    .filter(quiz_question::Column::Id.gt(question_id))
                    .order_by_asc(quiz_question::Column::Id)
                    .limit(1);
            }
        }

        let questions = query.all(self.db.as_ref()).await?;
        Ok(questions)
    }

    pub async fn find_by_id(&self, question_id: i32) -> Result<Option<quiz_question::Model>> {
        let question = quiz_question::Entity::find_by_id(question_id)
            .one(self.db.as_ref())
            .await?;
        Ok(question)
    }

    pub async fn create(
        &self,
        quiz_id: i32,
        questions: String,
        ans1: String,
        ans2: String,
        ans3: String,
        ans4: String,
        right_ans: String,
    ) -> Result<quiz_question::Model> {
        let model = quiz_question::ActiveModel {
            quiz_id: Set(quiz_id),
            questions: Set(questions),
            ans1: Set(ans1),
            ans2: Set(ans2),
            ans3: Set(ans3),
            ans4: Set(ans4),
            right_ans: Set(right_ans),
            add_time: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_question(id: i32, quiz_id: i32) -> quiz_question::Model {
        quiz_question::Model {
            id,
            quiz_id,
            questions: "2 + 2?".to_string(),
            ans1: "3".to_string(),
            ans2: "4".to_string(),
            ans3: "5".to_string(),
            ans4: "6".to_string(),
            right_ans: "4".to_string(),
            add_time: chrono::Utc::now().naive_utc(),
        }
    }

    async fn selector_sql(selector: QuestionSelector) -> String {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<quiz_question::Model>::new()])
                .into_connection(),
        );

        let repo = QuestionRepository::with_connection(db.clone());
        repo.find_by_quiz(1, selector).await.unwrap();
        drop(repo);

        let conn = Arc::try_unwrap(db).expect("repository still holds the connection");
        format!("{:?}", conn.into_transaction_log())
    }

    #[tokio::test]
    async fn all_selector_has_no_limit() {
        let sql = selector_sql(QuestionSelector::All).await;
        assert!(!sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn first_only_orders_ascending_with_limit() {
        let sql = selector_sql(QuestionSelector::FirstOnly).await;
        assert!(sql.contains("ORDER BY"));
        assert!(sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn after_selector_adds_cursor_filter() {
        let sql = selector_sql(QuestionSelector::After(5)).await;
        assert!(sql.contains('>'));
        assert!(sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn find_by_quiz_returns_rows() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_question(1, 1), test_question(2, 1)]])
                .into_connection(),
        );

        let repo = QuestionRepository::with_connection(db);
        let questions = repo.find_by_quiz(1, QuestionSelector::All).await.unwrap();
        assert_eq!(questions.len(), 2);
    }
}
