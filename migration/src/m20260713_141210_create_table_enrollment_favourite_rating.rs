use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create student_course_enrollment table
        manager
            .create_table(
                Table::create()
                    .table(StudentCourseEnrollment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentCourseEnrollment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentCourseEnrollment::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentCourseEnrollment::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentCourseEnrollment::EnrolledTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course")
                            .from_tbl(StudentCourseEnrollment::Table)
                            .from_col(StudentCourseEnrollment::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student")
                            .from_tbl(StudentCourseEnrollment::Table)
                            .from_col(StudentCourseEnrollment::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_favourite_course table
        manager
            .create_table(
                Table::create()
                    .table(StudentFavouriteCourse::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentFavouriteCourse::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentFavouriteCourse::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentFavouriteCourse::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentFavouriteCourse::Status)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_course")
                            .from_tbl(StudentFavouriteCourse::Table)
                            .from_col(StudentFavouriteCourse::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_student")
                            .from_tbl(StudentFavouriteCourse::Table)
                            .from_col(StudentFavouriteCourse::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_rating table
        manager
            .create_table(
                Table::create()
                    .table(CourseRating::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseRating::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseRating::CourseId).integer().not_null())
                    .col(ColumnDef::new(CourseRating::StudentId).integer().not_null())
                    .col(
                        ColumnDef::new(CourseRating::Rating)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(CourseRating::Reviews).text().null())
                    .col(
                        ColumnDef::new(CourseRating::ReviewTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_course")
                            .from_tbl(CourseRating::Table)
                            .from_col(CourseRating::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_student")
                            .from_tbl(CourseRating::Table)
                            .from_col(CourseRating::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for per-course and per-student scans
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_course_id")
                    .table(StudentCourseEnrollment::Table)
                    .col(StudentCourseEnrollment::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_student_id")
                    .table(StudentCourseEnrollment::Table)
                    .col(StudentCourseEnrollment::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favourite_student_id")
                    .table(StudentFavouriteCourse::Table)
                    .col(StudentFavouriteCourse::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_course_id")
                    .table(CourseRating::Table)
                    .col(CourseRating::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_rating_course_id")
                    .table(CourseRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_favourite_student_id")
                    .table(StudentFavouriteCourse::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollment_student_id")
                    .table(StudentCourseEnrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollment_course_id")
                    .table(StudentCourseEnrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseRating::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentFavouriteCourse::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentCourseEnrollment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentCourseEnrollment {
    Table,
    Id,
    CourseId,
    StudentId,
    EnrolledTime,
}

#[derive(DeriveIden)]
enum StudentFavouriteCourse {
    Table,
    Id,
    CourseId,
    StudentId,
    Status,
}

#[derive(DeriveIden)]
enum CourseRating {
    Table,
    Id,
    CourseId,
    StudentId,
    Rating,
    Reviews,
    ReviewTime,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
}
