use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create student_assignment table
        manager
            .create_table(
                Table::create()
                    .table(StudentAssignment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAssignment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentAssignment::TeacherId).integer().not_null())
                    .col(ColumnDef::new(StudentAssignment::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentAssignment::Title).string().not_null())
                    .col(ColumnDef::new(StudentAssignment::Detail).text().null())
                    .col(
                        ColumnDef::new(StudentAssignment::StudentStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentAssignment::AddTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_teacher")
                            .from_tbl(StudentAssignment::Table)
                            .from_col(StudentAssignment::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_student")
                            .from_tbl(StudentAssignment::Table)
                            .from_col(StudentAssignment::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create notification table, both actor columns are optional
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notification::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notification::TeacherId).integer().null())
                    .col(ColumnDef::new(Notification::StudentId).integer().null())
                    .col(ColumnDef::new(Notification::NotifSubject).string().null())
                    .col(ColumnDef::new(Notification::NotifFor).string().not_null())
                    .col(
                        ColumnDef::new(Notification::NotifCreatedTime)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Notification::NotifreadStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_teacher")
                            .from_tbl(Notification::Table)
                            .from_col(Notification::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_student")
                            .from_tbl(Notification::Table)
                            .from_col(Notification::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for inbox scans
        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_teacher_id")
                    .table(StudentAssignment::Table)
                    .col(StudentAssignment::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_student_id")
                    .table(StudentAssignment::Table)
                    .col(StudentAssignment::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_student_id")
                    .table(Notification::Table)
                    .col(Notification::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_student_id")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_assignment_student_id")
                    .table(StudentAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_assignment_teacher_id")
                    .table(StudentAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentAssignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentAssignment {
    Table,
    Id,
    TeacherId,
    StudentId,
    Title,
    Detail,
    StudentStatus,
    AddTime,
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    TeacherId,
    StudentId,
    NotifSubject,
    NotifFor,
    NotifCreatedTime,
    NotifreadStatus,
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
