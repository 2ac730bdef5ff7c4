pub mod assignments;
pub mod categories;
pub mod chapters;
pub mod courses;
pub mod enrollments;
pub mod favourites;
pub mod health;
pub mod notifications;
pub mod quizzes;
pub mod ratings;
pub mod students;
pub mod study_materials;
pub mod teachers;
