use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create quiz table
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quiz::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quiz::TeacherId).integer().not_null())
                    .col(ColumnDef::new(Quiz::Title).string().not_null())
                    .col(ColumnDef::new(Quiz::Detail).text().not_null())
                    .col(
                        ColumnDef::new(Quiz::AddTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_teacher")
                            .from_tbl(Quiz::Table)
                            .from_col(Quiz::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create quiz_question table
        manager
            .create_table(
                Table::create()
                    .table(QuizQuestion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizQuestion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuizQuestion::QuizId).integer().not_null())
                    .col(ColumnDef::new(QuizQuestion::Questions).string().not_null())
                    .col(ColumnDef::new(QuizQuestion::Ans1).string().not_null())
                    .col(ColumnDef::new(QuizQuestion::Ans2).string().not_null())
                    .col(ColumnDef::new(QuizQuestion::Ans3).string().not_null())
                    .col(ColumnDef::new(QuizQuestion::Ans4).string().not_null())
                    .col(ColumnDef::new(QuizQuestion::RightAns).string().not_null())
                    .col(
                        ColumnDef::new(QuizQuestion::AddTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_question_quiz")
                            .from_tbl(QuizQuestion::Table)
                            .from_col(QuizQuestion::QuizId)
                            .to_tbl(Quiz::Table)
                            .to_col(Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_quiz table linking quizzes to courses
        manager
            .create_table(
                Table::create()
                    .table(CourseQuiz::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseQuiz::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseQuiz::TeacherId).integer().not_null())
                    .col(ColumnDef::new(CourseQuiz::CourseId).integer().not_null())
                    .col(ColumnDef::new(CourseQuiz::QuizId).integer().not_null())
                    .col(
                        ColumnDef::new(CourseQuiz::AddTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_quiz_teacher")
                            .from_tbl(CourseQuiz::Table)
                            .from_col(CourseQuiz::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_quiz_course")
                            .from_tbl(CourseQuiz::Table)
                            .from_col(CourseQuiz::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_quiz_quiz")
                            .from_tbl(CourseQuiz::Table)
                            .from_col(CourseQuiz::QuizId)
                            .to_tbl(Quiz::Table)
                            .to_col(Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create attempt_quiz table recording per-question answers
        manager
            .create_table(
                Table::create()
                    .table(AttemptQuiz::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttemptQuiz::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AttemptQuiz::StudentId).integer().not_null())
                    .col(ColumnDef::new(AttemptQuiz::QuizId).integer().not_null())
                    .col(ColumnDef::new(AttemptQuiz::QuestionId).integer().not_null())
                    .col(ColumnDef::new(AttemptQuiz::RightAns).string().null())
                    .col(
                        ColumnDef::new(AttemptQuiz::AddTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempt_quiz_student")
                            .from_tbl(AttemptQuiz::Table)
                            .from_col(AttemptQuiz::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempt_quiz_quiz")
                            .from_tbl(AttemptQuiz::Table)
                            .from_col(AttemptQuiz::QuizId)
                            .to_tbl(Quiz::Table)
                            .to_col(Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempt_quiz_question")
                            .from_tbl(AttemptQuiz::Table)
                            .from_col(AttemptQuiz::QuestionId)
                            .to_tbl(QuizQuestion::Table)
                            .to_col(QuizQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for question pagination and attempt checks
        manager
            .create_index(
                Index::create()
                    .name("idx_quiz_question_quiz_id")
                    .table(QuizQuestion::Table)
                    .col(QuizQuestion::QuizId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_quiz_course_id")
                    .table(CourseQuiz::Table)
                    .col(CourseQuiz::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attempt_quiz_student_id")
                    .table(AttemptQuiz::Table)
                    .col(AttemptQuiz::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attempt_quiz_student_id")
                    .table(AttemptQuiz::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_quiz_course_id")
                    .table(CourseQuiz::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_quiz_question_quiz_id")
                    .table(QuizQuestion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AttemptQuiz::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseQuiz::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QuizQuestion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Quiz {
    Table,
    Id,
    TeacherId,
    Title,
    Detail,
    AddTime,
}

#[derive(DeriveIden)]
enum QuizQuestion {
    Table,
    Id,
    QuizId,
    Questions,
    Ans1,
    Ans2,
    Ans3,
    Ans4,
    RightAns,
    AddTime,
}

#[derive(DeriveIden)]
enum CourseQuiz {
    Table,
    Id,
    TeacherId,
    CourseId,
    QuizId,
    AddTime,
}

#[derive(DeriveIden)]
enum AttemptQuiz {
    Table,
    Id,
    StudentId,
    QuizId,
    QuestionId,
    RightAns,
    AddTime,
}

#[derive(DeriveIden)]
enum Teacher {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
}
