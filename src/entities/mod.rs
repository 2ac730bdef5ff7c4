pub mod attempt_quiz;
pub mod chapter;
pub mod course;
pub mod course_category;
pub mod course_quiz;
pub mod course_rating;
pub mod notification;
pub mod quiz;
pub mod quiz_question;
pub mod student;
pub mod student_assignment;
pub mod student_course_enrollment;
pub mod student_favourite_course;
pub mod study_material;
pub mod teacher;
