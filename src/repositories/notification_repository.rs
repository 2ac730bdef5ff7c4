use std::sync::Arc;

use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::notification;
use crate::static_service::require_connection;

const NOTIF_FOR_STUDENT: &str = "student";
const NOTIF_SUBJECT_ASSIGNMENT: &str = "assignment";

pub struct NotificationRepository {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<notification::Model>> {
        let notifications = notification::Entity::find().all(self.db.as_ref()).await?;
        Ok(notifications)
    }

    pub async fn create(
        &self,
        teacher_id: Option<i32>,
        student_id: Option<i32>,
        notif_subject: Option<String>,
        notif_for: String,
    ) -> Result<notification::Model> {
        let model = notification::ActiveModel {
            teacher_id: Set(teacher_id),
            student_id: Set(student_id),
            notif_subject: Set(notif_subject),
            notif_for: Set(notif_for),
            notif_created_time: Set(chrono::Utc::now().naive_utc()),
            notifread_status: Set(false),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    /// Unread assignment notifications addressed to a student.
    pub async fn unread_assignment_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<notification::Model>> {
        let notifications = notification::Entity::find()
            .filter(notification::Column::StudentId.eq(student_id))
            .filter(notification::Column::NotifFor.eq(NOTIF_FOR_STUDENT))
            .filter(notification::Column::NotifSubject.eq(NOTIF_SUBJECT_ASSIGNMENT))
            .filter(notification::Column::NotifreadStatus.eq(false))
            .all(self.db.as_ref())
            .await?;
        Ok(notifications)
    }

    /// Flips every assignment notification for the student to read,
    /// including ones already read. Returns the touched row count.
    pub async fn mark_assignment_read(&self, student_id: i32) -> Result<u64> {
        let result = notification::Entity::update_many()
            .col_expr(notification::Column::NotifreadStatus, Expr::value(true))
            .filter(notification::Column::StudentId.eq(student_id))
            .filter(notification::Column::NotifFor.eq(NOTIF_FOR_STUDENT))
            .filter(notification::Column::NotifSubject.eq(NOTIF_SUBJECT_ASSIGNMENT))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn mark_assignment_read_scopes_to_student_and_subject() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                }])
                .into_connection(),
        );

        let repo = NotificationRepository::with_connection(db.clone());
        let touched = repo.mark_assignment_read(7).await.unwrap();
        assert_eq!(touched, 2);

        drop(repo);
        let conn = Arc::try_unwrap(db).expect("repository still holds the connection");
        let sql = format!("{:?}", conn.into_transaction_log());
        assert!(sql.contains("notifread_status"));
        assert!(sql.contains("student"));
        assert!(sql.contains("assignment"));
    }
}
