use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::student;
use crate::static_service::require_connection;

pub struct StudentRepository {
    db: Arc<DatabaseConnection>,
}

impl StudentRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<student::Model>> {
        let students = student::Entity::find().all(self.db.as_ref()).await?;
        Ok(students)
    }

    pub async fn find_by_id(&self, student_id: i32) -> Result<Option<student::Model>> {
        let student = student::Entity::find_by_id(student_id)
            .one(self.db.as_ref())
            .await?;
        Ok(student)
    }

    pub async fn create(
        &self,
        full_name: String,
        email: String,
        password: String,
        username: String,
        interested_categories: String,
        profile_img: Option<String>,
    ) -> Result<student::Model> {
        let hashed_password = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
        let model = student::ActiveModel {
            full_name: Set(full_name),
            email: Set(email),
            password: Set(hashed_password),
            username: Set(username),
            interested_categories: Set(interested_categories),
            profile_img: Set(profile_img),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        student_id: i32,
        updates: StudentUpdate,
    ) -> Result<Option<student::Model>> {
        let Some(student) = self.find_by_id(student_id).await? else {
            return Ok(None);
        };

        let mut active_student: student::ActiveModel = student.into();

        if let Some(full_name) = updates.full_name {
            active_student.full_name = Set(full_name);
        }
        if let Some(email) = updates.email {
            active_student.email = Set(email);
        }
        if let Some(password) = updates.password {
            active_student.password = Set(bcrypt::hash(&password, bcrypt::DEFAULT_COST)?);
        }
        if let Some(username) = updates.username {
            active_student.username = Set(username);
        }
        if let Some(interested_categories) = updates.interested_categories {
            active_student.interested_categories = Set(interested_categories);
        }
        if let Some(profile_img) = updates.profile_img {
            active_student.profile_img = Set(Some(profile_img));
        }

        let result = active_student.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, student_id: i32) -> Result<bool> {
        let result = student::Entity::delete_by_id(student_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Same duplicate-email rule as the teacher login, lowest id first.
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<Option<student::Model>> {
        let candidates = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .order_by_asc(student::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(candidates
            .into_iter()
            .find(|student| bcrypt::verify(password, &student.password).unwrap_or(false)))
    }

    pub async fn change_password(&self, student_id: i32, new_password: &str) -> Result<bool> {
        let Some(student) = self.find_by_id(student_id).await? else {
            return Ok(false);
        };

        let mut active_student: student::ActiveModel = student.into();
        active_student.password = Set(bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?);
        active_student.update(self.db.as_ref()).await?;
        Ok(true)
    }
}

#[derive(Default)]
pub struct StudentUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub interested_categories: Option<String>,
    pub profile_img: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_student(id: i32, email: &str, password_hash: &str) -> student::Model {
        student::Model {
            id,
            full_name: "Minh Tran".to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            username: "minht".to_string(),
            interested_categories: "ai,web".to_string(),
            profile_img: None,
        }
    }

    #[tokio::test]
    async fn verify_login_returns_identity_on_match() {
        let hash = bcrypt::hash("pw", 4).unwrap();
        let student = test_student(5, "m@t.com", &hash);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[student]])
                .into_connection(),
        );

        let repo = StudentRepository::with_connection(db);
        let result = repo.verify_login("m@t.com", "pw").await.unwrap();

        assert_eq!(result.map(|s| s.id), Some(5));
    }

    #[tokio::test]
    async fn verify_login_returns_none_for_unknown_email() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<student::Model>::new()])
                .into_connection(),
        );

        let repo = StudentRepository::with_connection(db);
        let result = repo.verify_login("nobody@t.com", "pw").await.unwrap();

        assert!(result.is_none());
    }
}
