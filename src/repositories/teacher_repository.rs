use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::teacher;
use crate::static_service::require_connection;

pub struct TeacherRepository {
    db: Arc<DatabaseConnection>,
}

impl TeacherRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<teacher::Model>> {
        let teachers = teacher::Entity::find().all(self.db.as_ref()).await?;
        Ok(teachers)
    }

    pub async fn find_by_id(&self, teacher_id: i32) -> Result<Option<teacher::Model>> {
        let teacher = teacher::Entity::find_by_id(teacher_id)
            .one(self.db.as_ref())
            .await?;
        Ok(teacher)
    }

    pub async fn create(
        &self,
        full_name: String,
        email: String,
        password: String,
        qualification: String,
        mobile_no: String,
        skills: String,
        profile_img: Option<String>,
    ) -> Result<teacher::Model> {
        let hashed_password = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
        let model = teacher::ActiveModel {
            full_name: Set(full_name),
            email: Set(email),
            password: Set(hashed_password),
            qualification: Set(qualification),
            mobile_no: Set(mobile_no),
            skills: Set(skills),
            profile_img: Set(profile_img),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        teacher_id: i32,
        updates: TeacherUpdate,
    ) -> Result<Option<teacher::Model>> {
        let Some(teacher) = self.find_by_id(teacher_id).await? else {
            return Ok(None);
        };

        let mut active_teacher: teacher::ActiveModel = teacher.into();

        if let Some(full_name) = updates.full_name {
            active_teacher.full_name = Set(full_name);
        }
        if let Some(email) = updates.email {
            active_teacher.email = Set(email);
        }
        if let Some(password) = updates.password {
            active_teacher.password = Set(bcrypt::hash(&password, bcrypt::DEFAULT_COST)?);
        }
        if let Some(qualification) = updates.qualification {
            active_teacher.qualification = Set(qualification);
        }
        if let Some(mobile_no) = updates.mobile_no {
            active_teacher.mobile_no = Set(mobile_no);
        }
        if let Some(skills) = updates.skills {
            active_teacher.skills = Set(skills);
        }
        if let Some(profile_img) = updates.profile_img {
            active_teacher.profile_img = Set(Some(profile_img));
        }

        let result = active_teacher.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, teacher_id: i32) -> Result<bool> {
        let result = teacher::Entity::delete_by_id(teacher_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Email is not unique at the storage layer, so the candidate with the
    /// lowest id wins when several rows share an address.
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<Option<teacher::Model>> {
        let candidates = teacher::Entity::find()
            .filter(teacher::Column::Email.eq(email))
            .order_by_asc(teacher::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(candidates
            .into_iter()
            .find(|teacher| bcrypt::verify(password, &teacher.password).unwrap_or(false)))
    }

    pub async fn change_password(&self, teacher_id: i32, new_password: &str) -> Result<bool> {
        let Some(teacher) = self.find_by_id(teacher_id).await? else {
            return Ok(false);
        };

        let mut active_teacher: teacher::ActiveModel = teacher.into();
        active_teacher.password = Set(bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?);
        active_teacher.update(self.db.as_ref()).await?;
        Ok(true)
    }
}

#[derive(Default)]
pub struct TeacherUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub qualification: Option<String>,
    pub mobile_no: Option<String>,
    pub skills: Option<String>,
    pub profile_img: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_teacher(id: i32, email: &str, password_hash: &str) -> teacher::Model {
        teacher::Model {
            id,
            full_name: "Asha Rao".to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            qualification: "MSc".to_string(),
            mobile_no: "5550001".to_string(),
            skills: "python,django".to_string(),
            profile_img: None,
        }
    }

    #[tokio::test]
    async fn verify_login_accepts_matching_password() {
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        let teacher = test_teacher(1, "a@b.com", &hash);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[teacher]])
                .into_connection(),
        );

        let repo = TeacherRepository::with_connection(db);
        let result = repo.verify_login("a@b.com", "s3cret").await.unwrap();

        assert_eq!(result.map(|t| t.id), Some(1));
    }

    #[tokio::test]
    async fn verify_login_rejects_wrong_password() {
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        let teacher = test_teacher(1, "a@b.com", &hash);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[teacher]])
                .into_connection(),
        );

        let repo = TeacherRepository::with_connection(db);
        let result = repo.verify_login("a@b.com", "nope").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn verify_login_picks_first_matching_duplicate() {
        let first = test_teacher(3, "dup@b.com", &bcrypt::hash("other", 4).unwrap());
        let second = test_teacher(7, "dup@b.com", &bcrypt::hash("mine", 4).unwrap());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[first, second]])
                .into_connection(),
        );

        let repo = TeacherRepository::with_connection(db);
        let result = repo.verify_login("dup@b.com", "mine").await.unwrap();

        assert_eq!(result.map(|t| t.id), Some(7));
    }

    #[tokio::test]
    async fn change_password_returns_false_for_unknown_teacher() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<teacher::Model>::new()])
                .into_connection(),
        );

        let repo = TeacherRepository::with_connection(db);
        let changed = repo.change_password(99, "next").await.unwrap();

        assert!(!changed);
    }
}
