use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create teacher table
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teacher::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teacher::FullName).string().not_null())
                    .col(ColumnDef::new(Teacher::Email).string().not_null())
                    .col(ColumnDef::new(Teacher::Password).string().not_null())
                    .col(ColumnDef::new(Teacher::Qualification).string().not_null())
                    .col(ColumnDef::new(Teacher::MobileNo).string().not_null())
                    .col(ColumnDef::new(Teacher::Skills).text().not_null())
                    .col(ColumnDef::new(Teacher::ProfileImg).string().null())
                    .to_owned(),
            )
            .await?;

        // Create student table
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::FullName).string().not_null())
                    .col(ColumnDef::new(Student::Email).string().not_null())
                    .col(ColumnDef::new(Student::Password).string().not_null())
                    .col(ColumnDef::new(Student::Username).string().not_null())
                    .col(ColumnDef::new(Student::InterestedCategories).text().not_null())
                    .col(ColumnDef::new(Student::ProfileImg).string().null())
                    .to_owned(),
            )
            .await?;

        // Indexes for login lookups by email
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_email")
                    .table(Teacher::Table)
                    .col(Teacher::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_email")
                    .table(Student::Table)
                    .col(Student::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_email")
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teacher_email")
                    .table(Teacher::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teacher {
    Table,
    Id,
    FullName,
    Email,
    Password,
    Qualification,
    MobileNo,
    Skills,
    ProfileImg,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    FullName,
    Email,
    Password,
    Username,
    InterestedCategories,
    ProfileImg,
}
