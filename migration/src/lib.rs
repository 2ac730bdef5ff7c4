pub use sea_orm_migration::prelude::*;

mod m20260712_101500_create_table_teacher_student;
mod m20260712_103024_create_table_category_course_chapter;
mod m20260713_141210_create_table_enrollment_favourite_rating;
mod m20260714_090841_create_table_assignment_notification;
mod m20260715_153317_create_table_quiz;
mod m20260802_110248_create_table_study_material;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_101500_create_table_teacher_student::Migration),
            Box::new(m20260712_103024_create_table_category_course_chapter::Migration),
            Box::new(m20260713_141210_create_table_enrollment_favourite_rating::Migration),
            Box::new(m20260714_090841_create_table_assignment_notification::Migration),
            Box::new(m20260715_153317_create_table_quiz::Migration),
            Box::new(m20260802_110248_create_table_study_material::Migration),
        ]
    }
}
