use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create study_material table
        manager
            .create_table(
                Table::create()
                    .table(StudyMaterial::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyMaterial::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudyMaterial::CourseId).integer().not_null())
                    .col(ColumnDef::new(StudyMaterial::Title).string().not_null())
                    .col(ColumnDef::new(StudyMaterial::Description).text().not_null())
                    .col(ColumnDef::new(StudyMaterial::Upload).string().null())
                    .col(ColumnDef::new(StudyMaterial::Remarks).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_material_course")
                            .from_tbl(StudyMaterial::Table)
                            .from_col(StudyMaterial::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_study_material_course_id")
                    .table(StudyMaterial::Table)
                    .col(StudyMaterial::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_study_material_course_id")
                    .table(StudyMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudyMaterial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudyMaterial {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    Upload,
    Remarks,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
}
