use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{attempt_quiz, course_quiz, quiz};
use crate::routes::teachers::dto::TeacherBrief;
use crate::serialize::Linked;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuizRequest {
    pub teacher: i32,
    #[schema(example = "Rust ownership basics")]
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuizRequest {
    pub teacher: Option<i32>,
    pub title: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub teacher: Linked<TeacherBrief>,
    pub title: String,
    pub detail: String,
    /// How many courses the quiz is assigned to, recomputed per read.
    pub assign_status: i64,
    pub add_time: NaiveDateTime,
}

/// Nested quiz shape for question responses. The teacher stays a raw id.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizBrief {
    pub id: i32,
    pub teacher: i32,
    pub title: String,
    pub detail: String,
    pub add_time: NaiveDateTime,
}

impl From<quiz::Model> for QuizBrief {
    fn from(quiz: quiz::Model) -> Self {
        Self {
            id: quiz.id,
            teacher: quiz.teacher_id,
            title: quiz.title,
            detail: quiz.detail,
            add_time: quiz.add_time,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(example = "Which keyword moves ownership?")]
    pub questions: String,
    pub ans1: String,
    pub ans2: String,
    pub ans3: String,
    pub ans4: String,
    pub right_ans: String,
}

/// Questions carry no timestamp on the wire.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i32,
    #[schema(value_type = Object)]
    pub quiz: Linked<QuizBrief>,
    pub questions: String,
    pub ans1: String,
    pub ans2: String,
    pub ans3: String,
    pub ans4: String,
    pub right_ans: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseQuizRequest {
    pub teacher: i32,
    pub course: i32,
    pub quiz: i32,
}

/// Quiz-to-course assignment, always rendered with raw ids.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseQuizResponse {
    pub id: i32,
    pub teacher: i32,
    pub course: i32,
    pub quiz: i32,
    pub add_time: NaiveDateTime,
}

impl From<course_quiz::Model> for CourseQuizResponse {
    fn from(assignment: course_quiz::Model) -> Self {
        Self {
            id: assignment.id,
            teacher: assignment.teacher_id,
            course: assignment.course_id,
            quiz: assignment.quiz_id,
            add_time: assignment.add_time,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAttemptRequest {
    pub student: i32,
    pub quiz: i32,
    pub question: i32,
    pub right_ans: Option<String>,
}

/// A student's answer to one question. The quiz is reachable through the
/// question and is not serialized here.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttemptResponse {
    pub id: i32,
    pub student: i32,
    pub question: i32,
    pub right_ans: Option<String>,
    pub add_time: NaiveDateTime,
}

impl From<attempt_quiz::Model> for AttemptResponse {
    fn from(attempt: attempt_quiz::Model) -> Self {
        Self {
            id: attempt.id,
            student: attempt.student_id,
            question: attempt.question_id,
            right_ans: attempt.right_ans,
            add_time: attempt.add_time,
        }
    }
}
