use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Set,
};

use crate::entities::{chapter, course};
use crate::static_service::require_connection;

pub struct ChapterRepository {
    db: Arc<DatabaseConnection>,
}

impl ChapterRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<chapter::Model>> {
        let chapters = chapter::Entity::find().all(self.db.as_ref()).await?;
        Ok(chapters)
    }

    pub async fn find_by_course(&self, course_id: i32) -> Result<Vec<chapter::Model>> {
        let chapters = chapter::Entity::find()
            .filter(chapter::Column::CourseId.eq(course_id))
            .all(self.db.as_ref())
            .await?;
        Ok(chapters)
    }

    pub async fn find_by_id(&self, chapter_id: i32) -> Result<Option<chapter::Model>> {
        let chapter = chapter::Entity::find_by_id(chapter_id)
            .one(self.db.as_ref())
            .await?;
        Ok(chapter)
    }

    pub async fn count_by_teacher(&self, teacher_id: i32) -> Result<u64> {
        let count = chapter::Entity::find()
            .join(JoinType::InnerJoin, chapter::Relation::Course.def())
            .filter(course::Column::TeacherId.eq(teacher_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    pub async fn create(
        &self,
        course_id: i32,
        title: String,
        description: String,
        video: Option<String>,
        remarks: Option<String>,
    ) -> Result<chapter::Model> {
        let model = chapter::ActiveModel {
            course_id: Set(course_id),
            title: Set(title),
            description: Set(description),
            video: Set(video),
            remarks: Set(remarks),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        chapter_id: i32,
        updates: ChapterUpdate,
    ) -> Result<Option<chapter::Model>> {
        let Some(chapter) = self.find_by_id(chapter_id).await? else {
            return Ok(None);
        };

        let mut active_chapter: chapter::ActiveModel = chapter.into();

        if let Some(course_id) = updates.course_id {
            active_chapter.course_id = Set(course_id);
        }
        if let Some(title) = updates.title {
            active_chapter.title = Set(title);
        }
        if let Some(description) = updates.description {
            active_chapter.description = Set(description);
        }
        if let Some(video) = updates.video {
            active_chapter.video = Set(Some(video));
        }
        if let Some(remarks) = updates.remarks {
            active_chapter.remarks = Set(Some(remarks));
        }

        let result = active_chapter.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, chapter_id: i32) -> Result<bool> {
        let result = chapter::Entity::delete_by_id(chapter_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[derive(Default)]
pub struct ChapterUpdate {
    pub course_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video: Option<String>,
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    #[tokio::test]
    async fn count_by_teacher_joins_through_course() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    btreemap! { "num_items" => Value::BigInt(Some(3)) },
                ]])
                .into_connection(),
        );

        let repo = ChapterRepository::with_connection(db.clone());
        let count = repo.count_by_teacher(2).await.unwrap();
        assert_eq!(count, 3);

        drop(repo);
        let conn = Arc::try_unwrap(db).expect("repository still holds the connection");
        let sql = format!("{:?}", conn.into_transaction_log());
        assert!(sql.contains("JOIN"));
        assert!(sql.contains("teacher_id"));
    }
}
