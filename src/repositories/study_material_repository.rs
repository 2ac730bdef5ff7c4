use std::sync::Arc;

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::entities::study_material;
use crate::static_service::require_connection;

pub struct StudyMaterialRepository {
    db: Arc<DatabaseConnection>,
}

impl StudyMaterialRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<study_material::Model>> {
        let materials = study_material::Entity::find().all(self.db.as_ref()).await?;
        Ok(materials)
    }

    pub async fn find_by_course(&self, course_id: i32) -> Result<Vec<study_material::Model>> {
        let materials = study_material::Entity::find()
            .filter(study_material::Column::CourseId.eq(course_id))
            .all(self.db.as_ref())
            .await?;
        Ok(materials)
    }

    pub async fn find_by_id(&self, material_id: i32) -> Result<Option<study_material::Model>> {
        let material = study_material::Entity::find_by_id(material_id)
            .one(self.db.as_ref())
            .await?;
        Ok(material)
    }

    pub async fn create(
        &self,
        course_id: i32,
        title: String,
        description: String,
        upload: Option<String>,
        remarks: Option<String>,
    ) -> Result<study_material::Model> {
        let model = study_material::ActiveModel {
            course_id: Set(course_id),
            title: Set(title),
            description: Set(description),
            upload: Set(upload),
            remarks: Set(remarks),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        material_id: i32,
        updates: StudyMaterialUpdate,
    ) -> Result<Option<study_material::Model>> {
        let Some(material) = self.find_by_id(material_id).await? else {
            return Ok(None);
        };

        let mut active_material: study_material::ActiveModel = material.into();

        if let Some(title) = updates.title {
            active_material.title = Set(title);
        }
        if let Some(description) = updates.description {
            active_material.description = Set(description);
        }
        if let Some(upload) = updates.upload {
            active_material.upload = Set(Some(upload));
        }
        if let Some(remarks) = updates.remarks {
            active_material.remarks = Set(Some(remarks));
        }

        let result = active_material.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, material_id: i32) -> Result<bool> {
        let result = study_material::Entity::delete_by_id(material_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[derive(Default)]
pub struct StudyMaterialUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub upload: Option<String>,
    pub remarks: Option<String>,
}
