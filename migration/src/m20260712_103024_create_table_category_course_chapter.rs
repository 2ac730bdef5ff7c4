use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create course_category table
        manager
            .create_table(
                Table::create()
                    .table(CourseCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseCategory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseCategory::Title).string().not_null())
                    .col(ColumnDef::new(CourseCategory::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course table
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Course::TeacherId).integer().not_null())
                    .col(ColumnDef::new(Course::Title).string().not_null())
                    .col(ColumnDef::new(Course::Description).text().not_null())
                    .col(ColumnDef::new(Course::FeaturedImg).string().null())
                    .col(ColumnDef::new(Course::Techs).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_category")
                            .from_tbl(Course::Table)
                            .from_col(Course::CategoryId)
                            .to_tbl(CourseCategory::Table)
                            .to_col(CourseCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher")
                            .from_tbl(Course::Table)
                            .from_col(Course::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create chapter table
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chapter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chapter::CourseId).integer().not_null())
                    .col(ColumnDef::new(Chapter::Title).string().not_null())
                    .col(ColumnDef::new(Chapter::Description).text().not_null())
                    .col(ColumnDef::new(Chapter::Video).string().null())
                    .col(ColumnDef::new(Chapter::Remarks).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_course")
                            .from_tbl(Chapter::Table)
                            .from_col(Chapter::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for course filtering and chapter lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_course_category_id")
                    .table(Course::Table)
                    .col(Course::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_teacher_id")
                    .table(Course::Table)
                    .col(Course::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_course_id")
                    .table(Chapter::Table)
                    .col(Chapter::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_chapter_course_id")
                    .table(Chapter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_teacher_id")
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_category_id")
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CourseCategory {
    Table,
    Id,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
    CategoryId,
    TeacherId,
    Title,
    Description,
    FeaturedImg,
    Techs,
}

#[derive(DeriveIden)]
enum Chapter {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    Video,
    Remarks,
}

#[derive(DeriveIden)]
enum Teacher {
    Table,
    Id,
}
