pub mod assignment_repository;
pub mod attempt_repository;
pub mod category_repository;
pub mod chapter_repository;
pub mod course_quiz_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod favourite_repository;
pub mod notification_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod rating_repository;
pub mod student_repository;
pub mod study_material_repository;
pub mod teacher_repository;

pub use assignment_repository::{AssignmentRepository, AssignmentUpdate};
pub use attempt_repository::AttemptRepository;
pub use category_repository::CategoryRepository;
pub use chapter_repository::{ChapterRepository, ChapterUpdate};
pub use course_quiz_repository::CourseQuizRepository;
pub use course_repository::{CourseRepository, CourseSelectors, CourseUpdate};
pub use enrollment_repository::EnrollmentRepository;
pub use favourite_repository::FavouriteRepository;
pub use notification_repository::NotificationRepository;
pub use question_repository::{QuestionRepository, QuestionSelector};
pub use quiz_repository::{QuizRepository, QuizUpdate};
pub use rating_repository::RatingRepository;
pub use student_repository::{StudentRepository, StudentUpdate};
pub use study_material_repository::{StudyMaterialRepository, StudyMaterialUpdate};
pub use teacher_repository::{TeacherRepository, TeacherUpdate};
