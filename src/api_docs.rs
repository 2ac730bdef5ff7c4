use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::health_check,
        routes::categories::route::list_categories,
        routes::categories::route::create_category,
        routes::teachers::route::list_teachers,
        routes::teachers::route::create_teacher,
        routes::teachers::route::get_teacher,
        routes::teachers::route::update_teacher,
        routes::teachers::route::delete_teacher,
        routes::teachers::route::teacher_dashboard,
        routes::teachers::route::teacher_login,
        routes::teachers::route::teacher_change_password,
        routes::students::route::list_students,
        routes::students::route::create_student,
        routes::students::route::get_student,
        routes::students::route::update_student,
        routes::students::route::delete_student,
        routes::students::route::student_dashboard,
        routes::students::route::student_login,
        routes::students::route::student_change_password,
        routes::courses::route::list_courses,
        routes::courses::route::create_course,
        routes::courses::route::search_courses,
        routes::courses::route::get_course,
        routes::courses::route::recommended_courses,
        routes::courses::route::teacher_courses,
        routes::courses::route::get_teacher_course,
        routes::courses::route::update_course,
        routes::courses::route::delete_course,
        routes::chapters::route::list_chapters,
        routes::chapters::route::create_chapter,
        routes::chapters::route::course_chapters,
        routes::chapters::route::create_course_chapter,
        routes::chapters::route::get_chapter,
        routes::chapters::route::update_chapter,
        routes::chapters::route::delete_chapter,
        routes::enrollments::route::list_enrollments,
        routes::enrollments::route::enroll_student,
        routes::enrollments::route::enroll_status,
        routes::enrollments::route::enrolled_students_by_teacher,
        routes::enrollments::route::enrolled_students_by_course,
        routes::enrollments::route::enrolled_courses,
        routes::favourites::route::list_favourites,
        routes::favourites::route::add_favourite,
        routes::favourites::route::student_favourites,
        routes::favourites::route::remove_favourite,
        routes::favourites::route::favourite_status,
        routes::ratings::route::list_ratings,
        routes::ratings::route::rate_course,
        routes::ratings::route::rating_status,
        routes::assignments::route::list_assignments,
        routes::assignments::route::create_assignment,
        routes::assignments::route::my_assignments,
        routes::assignments::route::create_my_assignment,
        routes::assignments::route::get_assignment,
        routes::assignments::route::update_assignment,
        routes::assignments::route::delete_assignment,
        routes::notifications::route::list_student_notifications,
        routes::notifications::route::create_student_notification,
        routes::notifications::route::list_notifications,
        routes::notifications::route::create_notification,
        routes::quizzes::route::list_quizzes,
        routes::quizzes::route::create_quiz,
        routes::quizzes::route::list_teacher_quizzes,
        routes::quizzes::route::get_quiz,
        routes::quizzes::route::update_quiz,
        routes::quizzes::route::delete_quiz,
        routes::quizzes::route::get_quiz_detail,
        routes::quizzes::route::update_quiz_detail,
        routes::quizzes::route::delete_quiz_detail,
        routes::quizzes::route::list_quiz_questions,
        routes::quizzes::route::create_quiz_question,
        routes::quizzes::route::first_quiz_question,
        routes::quizzes::route::next_quiz_question,
        routes::quizzes::route::list_course_quizzes,
        routes::quizzes::route::assign_quiz_to_course,
        routes::quizzes::route::assigned_quizzes,
        routes::quizzes::route::quiz_assign_status,
        routes::quizzes::route::list_attempts,
        routes::quizzes::route::create_attempt,
        routes::quizzes::route::quiz_attempt_status,
        routes::study_materials::route::list_study_materials,
        routes::study_materials::route::create_study_material,
        routes::study_materials::route::course_study_materials,
        routes::study_materials::route::get_study_material,
        routes::study_materials::route::update_study_material,
        routes::study_materials::route::delete_study_material,
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Categories", description = "Course categories"),
        (name = "Teachers", description = "Teacher accounts and dashboards"),
        (name = "Students", description = "Student accounts and dashboards"),
        (name = "Courses", description = "Courses, search and recommendations"),
        (name = "Chapters", description = "Course chapters"),
        (name = "Enrollments", description = "Student course enrollments"),
        (name = "Favourites", description = "Favourite courses"),
        (name = "Ratings", description = "Course ratings"),
        (name = "Assignments", description = "Teacher-to-student assignments"),
        (name = "Notifications", description = "In-app notifications"),
        (name = "Quizzes", description = "Quizzes, questions and attempts"),
        (name = "Study materials", description = "Course study materials")
    )
)]
pub struct ApiDoc;
