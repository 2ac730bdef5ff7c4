use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{
    AttemptResponse, CourseQuizResponse, CreateAttemptRequest, CreateCourseQuizRequest,
    CreateQuestionRequest, CreateQuizRequest, QuestionResponse, QuizBrief, QuizResponse,
    UpdateQuizRequest,
};
use crate::entities::{quiz, quiz_question};
use crate::error::ApiError;
use crate::repositories::{
    AttemptRepository, CourseQuizRepository, CourseRepository, QuestionRepository,
    QuestionSelector, QuizRepository, QuizUpdate, StudentRepository, TeacherRepository,
};
use crate::routes::teachers::route::teacher_link;
use crate::serialize::{ExpandDepth, Linked, StatusResponse};

pub fn create_route() -> Router {
    Router::new()
        .route("/quiz/", get(list_quizzes))
        .route("/quiz/", post(create_quiz))
        .route("/teacher-quiz/{teacher_id}", get(list_teacher_quizzes))
        .route("/teacher-quiz-detail/{quiz_id}", get(get_quiz))
        .route("/teacher-quiz-detail/{quiz_id}", put(update_quiz))
        .route("/teacher-quiz-detail/{quiz_id}", patch(update_quiz))
        .route("/teacher-quiz-detail/{quiz_id}", delete(delete_quiz))
        .route("/quiz/{quiz_id}/", get(get_quiz_detail))
        .route("/quiz/{quiz_id}/", put(update_quiz_detail))
        .route("/quiz/{quiz_id}/", patch(update_quiz_detail))
        .route("/quiz/{quiz_id}/", delete(delete_quiz_detail))
        .route("/quiz-questions/{quiz_id}", get(list_quiz_questions))
        .route("/quiz-questions/{quiz_id}", post(create_quiz_question))
        .route("/quiz-questions/{quiz_id}/{limit}", get(first_quiz_question))
        .route(
            "/quiz-questions/{quiz_id}/next-question/{question_id}",
            get(next_quiz_question),
        )
        .route("/quiz-assign-course/", get(list_course_quizzes))
        .route("/quiz-assign-course/", post(assign_quiz_to_course))
        .route("/fetch-assigned-quiz/{course_id}", get(assigned_quizzes))
        .route(
            "/fetch-quiz-assign-status/{quiz_id}/{course_id}",
            get(quiz_assign_status),
        )
        .route("/attempt-quiz/", get(list_attempts))
        .route("/attempt-quiz/", post(create_attempt))
        .route(
            "/fetch-quiz-attempt-status/{quiz_id}/{student_id}",
            get(quiz_attempt_status),
        )
}

/// Renders a quiz foreign key as either the raw id or the nested quiz shape.
pub(crate) async fn quiz_link(
    quiz_id: i32,
    depth: ExpandDepth,
) -> Result<Linked<QuizBrief>, ApiError> {
    if !depth.expands() {
        return Ok(Linked::Id(quiz_id));
    }

    let quiz_repo = QuizRepository::new();
    match quiz_repo.find_by_id(quiz_id).await? {
        Some(found) => Ok(Linked::Full(Box::new(QuizBrief::from(found)))),
        None => Ok(Linked::Id(quiz_id)),
    }
}

async fn quiz_response(quiz: quiz::Model, depth: ExpandDepth) -> Result<QuizResponse, ApiError> {
    let teacher = teacher_link(quiz.teacher_id, depth).await?;
    let assign_status = QuizRepository::new().assign_count(quiz.id).await? as i64;

    Ok(QuizResponse {
        id: quiz.id,
        teacher,
        title: quiz.title,
        detail: quiz.detail,
        assign_status,
        add_time: quiz.add_time,
    })
}

async fn question_response(
    question: quiz_question::Model,
    depth: ExpandDepth,
) -> Result<QuestionResponse, ApiError> {
    let quiz = quiz_link(question.quiz_id, depth).await?;

    Ok(QuestionResponse {
        id: question.id,
        quiz,
        questions: question.questions,
        ans1: question.ans1,
        ans2: question.ans2,
        ans3: question.ans3,
        ans4: question.ans4,
        right_ans: question.right_ans,
    })
}

async fn question_list_response(
    questions: Vec<quiz_question::Model>,
) -> Result<Vec<QuestionResponse>, ApiError> {
    let mut response = Vec::new();
    for question in questions {
        response.push(question_response(question, ExpandDepth::Related).await?);
    }
    Ok(response)
}

/// List all quizzes
#[utoipa::path(
    get,
    path = "/quiz/",
    responses(
        (status = 200, description = "Quizzes retrieved", body = [QuizResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn list_quizzes() -> Result<(StatusCode, Json<Vec<QuizResponse>>), ApiError> {
    let quiz_repo = QuizRepository::new();
    let quizzes = quiz_repo.find_all().await?;

    let mut response = Vec::new();
    for quiz in quizzes {
        response.push(quiz_response(quiz, ExpandDepth::Deep).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Create a quiz
#[utoipa::path(
    post,
    path = "/quiz/",
    request_body = CreateQuizRequest,
    responses(
        (status = 201, description = "Quiz created", body = QuizResponse),
        (status = 400, description = "Referenced teacher does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn create_quiz(
    Json(payload): Json<CreateQuizRequest>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    if teacher_repo.find_by_id(payload.teacher).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Teacher {} does not exist",
            payload.teacher
        )));
    }

    let quiz_repo = QuizRepository::new();
    let quiz = quiz_repo
        .create(payload.teacher, payload.title, payload.detail)
        .await?;

    let response = quiz_response(quiz, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Quizzes owned by a teacher
#[utoipa::path(
    get,
    path = "/teacher-quiz/{teacher_id}",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Quizzes retrieved", body = [QuizResponse]),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn list_teacher_quizzes(
    Path(teacher_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<QuizResponse>>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let quiz_repo = QuizRepository::new();
    let quizzes = quiz_repo.find_by_teacher(teacher_id).await?;

    let mut response = Vec::new();
    for quiz in quizzes {
        response.push(quiz_response(quiz, ExpandDepth::Deep).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Get quiz by ID
#[utoipa::path(
    get,
    path = "/teacher-quiz-detail/{quiz_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz retrieved", body = QuizResponse),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn get_quiz(
    Path(quiz_id): Path<i32>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    let quiz_repo = QuizRepository::new();

    let quiz = quiz_repo
        .find_by_id(quiz_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))?;

    let response = quiz_response(quiz, ExpandDepth::Deep).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Update quiz (full or partial)
#[utoipa::path(
    put,
    path = "/teacher-quiz-detail/{quiz_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = UpdateQuizRequest,
    responses(
        (status = 200, description = "Quiz updated", body = QuizResponse),
        (status = 400, description = "Referenced teacher does not exist"),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn update_quiz(
    Path(quiz_id): Path<i32>,
    Json(payload): Json<UpdateQuizRequest>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    if let Some(teacher_id) = payload.teacher {
        let teacher_repo = TeacherRepository::new();
        if teacher_repo.find_by_id(teacher_id).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "Teacher {teacher_id} does not exist"
            )));
        }
    }

    let updates = QuizUpdate {
        teacher_id: payload.teacher,
        title: payload.title,
        detail: payload.detail,
    };

    let quiz_repo = QuizRepository::new();
    let updated = quiz_repo
        .update(quiz_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))?;

    let response = quiz_response(updated, ExpandDepth::Flat).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete quiz
#[utoipa::path(
    delete,
    path = "/teacher-quiz-detail/{quiz_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 204, description = "Quiz deleted"),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn delete_quiz(Path(quiz_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let quiz_repo = QuizRepository::new();

    let deleted = quiz_repo.delete(quiz_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Quiz not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get quiz by ID (student view)
#[utoipa::path(
    get,
    path = "/quiz/{quiz_id}/",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz retrieved", body = QuizResponse),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn get_quiz_detail(
    Path(quiz_id): Path<i32>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    get_quiz(Path(quiz_id)).await
}

/// Update quiz (full or partial)
#[utoipa::path(
    put,
    path = "/quiz/{quiz_id}/",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = UpdateQuizRequest,
    responses(
        (status = 200, description = "Quiz updated", body = QuizResponse),
        (status = 400, description = "Referenced teacher does not exist"),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn update_quiz_detail(
    Path(quiz_id): Path<i32>,
    Json(payload): Json<UpdateQuizRequest>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    update_quiz(Path(quiz_id), Json(payload)).await
}

/// Delete quiz
#[utoipa::path(
    delete,
    path = "/quiz/{quiz_id}/",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 204, description = "Quiz deleted"),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn delete_quiz_detail(Path(quiz_id): Path<i32>) -> Result<StatusCode, ApiError> {
    delete_quiz(Path(quiz_id)).await
}

/// All questions of a quiz
#[utoipa::path(
    get,
    path = "/quiz-questions/{quiz_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Questions retrieved", body = [QuestionResponse]),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn list_quiz_questions(
    Path(quiz_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<QuestionResponse>>), ApiError> {
    let quiz_repo = QuizRepository::new();
    quiz_repo
        .find_by_id(quiz_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))?;

    let question_repo = QuestionRepository::new();
    let questions = question_repo
        .find_by_quiz(quiz_id, QuestionSelector::All)
        .await?;

    let response = question_list_response(questions).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Add a question to the quiz in the path
#[utoipa::path(
    post,
    path = "/quiz-questions/{quiz_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn create_quiz_question(
    Path(quiz_id): Path<i32>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let quiz_repo = QuizRepository::new();
    quiz_repo
        .find_by_id(quiz_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))?;

    let question_repo = QuestionRepository::new();
    let question = question_repo
        .create(
            quiz_id,
            payload.questions,
            payload.ans1,
            payload.ans2,
            payload.ans3,
            payload.ans4,
            payload.right_ans,
        )
        .await?;

    let response = question_response(question, ExpandDepth::Flat).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// First question of a quiz. The limit segment is accepted for shape but any
/// value selects exactly one question.
#[utoipa::path(
    get,
    path = "/quiz-questions/{quiz_id}/{limit}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("limit" = i32, Path, description = "Ignored; always selects one question")
    ),
    responses(
        (status = 200, description = "Questions retrieved", body = [QuestionResponse]),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn first_quiz_question(
    Path((quiz_id, _limit)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<QuestionResponse>>), ApiError> {
    let quiz_repo = QuizRepository::new();
    quiz_repo
        .find_by_id(quiz_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))?;

    let question_repo = QuestionRepository::new();
    let questions = question_repo
        .find_by_quiz(quiz_id, QuestionSelector::FirstOnly)
        .await?;

    let response = question_list_response(questions).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// The question following the given one, lowest id first
#[utoipa::path(
    get,
    path = "/quiz-questions/{quiz_id}/next-question/{question_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("question_id" = i32, Path, description = "Cursor question ID")
    ),
    responses(
        (status = 200, description = "Questions retrieved", body = [QuestionResponse]),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn next_quiz_question(
    Path((quiz_id, question_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Vec<QuestionResponse>>), ApiError> {
    let quiz_repo = QuizRepository::new();
    quiz_repo
        .find_by_id(quiz_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))?;

    let question_repo = QuestionRepository::new();
    let questions = question_repo
        .find_by_quiz(quiz_id, QuestionSelector::After(question_id))
        .await?;

    let response = question_list_response(questions).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// List all quiz-to-course assignments
#[utoipa::path(
    get,
    path = "/quiz-assign-course/",
    responses(
        (status = 200, description = "Assignments retrieved", body = [CourseQuizResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn list_course_quizzes()
-> Result<(StatusCode, Json<Vec<CourseQuizResponse>>), ApiError> {
    let course_quiz_repo = CourseQuizRepository::new();
    let assignments = course_quiz_repo.find_all().await?;

    let response = assignments
        .into_iter()
        .map(CourseQuizResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Assign a quiz to a course
#[utoipa::path(
    post,
    path = "/quiz-assign-course/",
    request_body = CreateCourseQuizRequest,
    responses(
        (status = 201, description = "Quiz assigned", body = CourseQuizResponse),
        (status = 400, description = "Referenced teacher, course or quiz does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn assign_quiz_to_course(
    Json(payload): Json<CreateCourseQuizRequest>,
) -> Result<(StatusCode, Json<CourseQuizResponse>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    if teacher_repo.find_by_id(payload.teacher).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Teacher {} does not exist",
            payload.teacher
        )));
    }

    let course_repo = CourseRepository::new();
    if course_repo.find_by_id(payload.course).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Course {} does not exist",
            payload.course
        )));
    }

    let quiz_repo = QuizRepository::new();
    if quiz_repo.find_by_id(payload.quiz).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Quiz {} does not exist",
            payload.quiz
        )));
    }

    let course_quiz_repo = CourseQuizRepository::new();
    let assignment = course_quiz_repo
        .create(payload.teacher, payload.course, payload.quiz)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CourseQuizResponse::from(assignment)),
    ))
}

/// Quizzes assigned to a course
#[utoipa::path(
    get,
    path = "/fetch-assigned-quiz/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Assignments retrieved", body = [CourseQuizResponse]),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn assigned_quizzes(
    Path(course_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<CourseQuizResponse>>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let course_quiz_repo = CourseQuizRepository::new();
    let assignments = course_quiz_repo.find_by_course(course_id).await?;

    let response = assignments
        .into_iter()
        .map(CourseQuizResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Whether a quiz is assigned to a course
#[utoipa::path(
    get,
    path = "/fetch-quiz-assign-status/{quiz_id}/{course_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Assignment status", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn quiz_assign_status(
    Path((quiz_id, course_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let course_quiz_repo = CourseQuizRepository::new();
    let status = course_quiz_repo.assign_exists(quiz_id, course_id).await?;

    Ok((StatusCode::OK, Json(StatusResponse { status })))
}

/// List all quiz attempts
#[utoipa::path(
    get,
    path = "/attempt-quiz/",
    responses(
        (status = 200, description = "Attempts retrieved", body = [AttemptResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn list_attempts() -> Result<(StatusCode, Json<Vec<AttemptResponse>>), ApiError> {
    let attempt_repo = AttemptRepository::new();
    let attempts = attempt_repo.find_all().await?;

    let response = attempts.into_iter().map(AttemptResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Record a student's answer to a question
#[utoipa::path(
    post,
    path = "/attempt-quiz/",
    request_body = CreateAttemptRequest,
    responses(
        (status = 201, description = "Attempt recorded", body = AttemptResponse),
        (status = 400, description = "Referenced student, quiz or question does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn create_attempt(
    Json(payload): Json<CreateAttemptRequest>,
) -> Result<(StatusCode, Json<AttemptResponse>), ApiError> {
    let student_repo = StudentRepository::new();
    if student_repo.find_by_id(payload.student).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Student {} does not exist",
            payload.student
        )));
    }

    let quiz_repo = QuizRepository::new();
    if quiz_repo.find_by_id(payload.quiz).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Quiz {} does not exist",
            payload.quiz
        )));
    }

    let question_repo = QuestionRepository::new();
    if question_repo.find_by_id(payload.question).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Question {} does not exist",
            payload.question
        )));
    }

    let attempt_repo = AttemptRepository::new();
    let attempt = attempt_repo
        .create(
            payload.student,
            payload.quiz,
            payload.question,
            payload.right_ans,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AttemptResponse::from(attempt))))
}

/// Whether a student has attempted any question of a quiz
#[utoipa::path(
    get,
    path = "/fetch-quiz-attempt-status/{quiz_id}/{student_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Attempt status", body = StatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn quiz_attempt_status(
    Path((quiz_id, student_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let attempt_repo = AttemptRepository::new();
    let status = attempt_repo.attempted(quiz_id, student_id).await?;

    Ok((StatusCode::OK, Json(StatusResponse { status })))
}
