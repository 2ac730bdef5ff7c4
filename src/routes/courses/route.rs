use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use super::dto::{
    CourseBrief, CourseListQuery, CourseResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::entities::course;
use crate::error::ApiError;
use crate::repositories::{
    CategoryRepository, ChapterRepository, CourseRepository, CourseSelectors, CourseUpdate,
    EnrollmentRepository, RatingRepository, StudentRepository, TeacherRepository,
};
use crate::routes::categories::route::category_link;
use crate::routes::chapters::dto::ChapterBrief;
use crate::routes::teachers::route::teacher_link;
use crate::serialize::{ExpandDepth, Linked};
use crate::utils::tags::split_tags;

pub fn create_route() -> Router {
    Router::new()
        .route("/course/", get(list_courses))
        .route("/course/", post(create_course))
        .route("/search-courses/{searchstring}", get(search_courses))
        .route("/course/{course_id}", get(get_course))
        .route(
            "/fetch-recommended-courses/{student_id}",
            get(recommended_courses),
        )
        .route("/teacher-courses/{teacher_id}", get(teacher_courses))
        .route("/teacher-course-detail/{course_id}", get(get_teacher_course))
        .route("/teacher-course-detail/{course_id}", put(update_course))
        .route("/teacher-course-detail/{course_id}", patch(update_course))
        .route("/teacher-course-detail/{course_id}", delete(delete_course))
}

/// Renders a course foreign key as either the raw id or a nested course
/// object whose own foreign keys expand one level less.
pub(crate) async fn course_link(
    course_id: i32,
    depth: ExpandDepth,
) -> Result<Linked<CourseBrief>, ApiError> {
    if !depth.expands() {
        return Ok(Linked::Id(course_id));
    }

    let course_repo = CourseRepository::new();
    match course_repo.find_by_id(course_id).await? {
        Some(found) => Ok(Linked::Full(Box::new(
            course_brief(found, depth.nested()).await?,
        ))),
        None => Ok(Linked::Id(course_id)),
    }
}

/// Builds the nested course shape. `depth` governs the brief's own
/// category/teacher fields.
pub(crate) async fn course_brief(
    course: course::Model,
    depth: ExpandDepth,
) -> Result<CourseBrief, ApiError> {
    let category = category_link(course.category_id, depth).await?;
    let teacher = teacher_link(course.teacher_id, depth).await?;

    Ok(CourseBrief {
        id: course.id,
        category,
        teacher,
        title: course.title,
        description: course.description,
        featured_img: course.featured_img,
        techs: course.techs,
    })
}

/// Assembles the full course shape. The aggregate fields are recomputed on
/// every call; `include_collections` additionally pulls the chapter list and
/// the related courses, which only the GET shapes carry.
async fn course_response(
    course: course::Model,
    depth: ExpandDepth,
    include_collections: bool,
) -> Result<CourseResponse, ApiError> {
    let category = category_link(course.category_id, depth).await?;
    let teacher = teacher_link(course.teacher_id, depth).await?;

    let total_enrolled_students =
        EnrollmentRepository::new().count_by_course(course.id).await? as i64;
    let course_rating = RatingRepository::new().average_for_course(course.id).await?;

    let (course_chapters, related_courses) = if include_collections {
        let chapters = ChapterRepository::new().find_by_course(course.id).await?;
        let chapter_briefs: Vec<ChapterBrief> =
            chapters.into_iter().map(ChapterBrief::from).collect();

        let related = CourseRepository::new().related(&course.techs).await?;
        let mut related_briefs = Vec::new();
        for related_course in related {
            related_briefs.push(course_brief(related_course, depth.nested()).await?);
        }

        (Some(chapter_briefs), Some(related_briefs))
    } else {
        (None, None)
    };

    Ok(CourseResponse {
        id: course.id,
        category,
        teacher,
        title: course.title,
        description: course.description,
        featured_img: course.featured_img,
        tech_list: split_tags(&course.techs),
        techs: course.techs,
        total_enrolled_students,
        course_rating,
        course_chapters,
        related_courses,
    })
}

/// List courses, optionally narrowed by one of the selector parameters
#[utoipa::path(
    get,
    path = "/course/",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Courses retrieved", body = [CourseResponse]),
        (status = 400, description = "skill_name is not a teacher id"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    Query(query): Query<CourseListQuery>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), ApiError> {
    let CourseListQuery {
        result,
        category,
        skill_name,
        teacher,
    } = query;

    let mut selectors = CourseSelectors {
        result,
        category,
        skill_teacher: None,
    };

    // The skill selector only activates when the teacher flag rides along.
    if let (Some(skill_name), Some(_)) = (skill_name, teacher) {
        let teacher_id = skill_name.parse::<i32>().map_err(|_| {
            ApiError::Validation(format!(
                "skill_name must be a numeric teacher id, got '{skill_name}'"
            ))
        })?;

        match TeacherRepository::new().find_by_id(teacher_id).await? {
            Some(teacher) => selectors.skill_teacher = Some((skill_name, teacher.id)),
            // No such teacher matches no courses, it is not an error.
            None => return Ok((StatusCode::OK, Json(Vec::new()))),
        }
    }

    let course_repo = CourseRepository::new();
    let courses = course_repo.list(selectors).await?;

    let mut response = Vec::new();
    for course in courses {
        response.push(course_response(course, ExpandDepth::Deep, true).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Search courses by title or techs
#[utoipa::path(
    get,
    path = "/search-courses/{searchstring}",
    params(
        ("searchstring" = String, Path, description = "Case-insensitive search term")
    ),
    responses(
        (status = 200, description = "Matching courses", body = [CourseResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn search_courses(
    Path(searchstring): Path<String>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), ApiError> {
    let course_repo = CourseRepository::new();
    let courses = course_repo.search(&searchstring).await?;

    let mut response = Vec::new();
    for course in courses {
        response.push(course_response(course, ExpandDepth::Deep, true).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Courses recommended from a student's interested categories
#[utoipa::path(
    get,
    path = "/fetch-recommended-courses/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Recommended courses", body = [CourseResponse]),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn recommended_courses(
    Path(student_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), ApiError> {
    let student_repo = StudentRepository::new();
    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let course_repo = CourseRepository::new();
    let courses = course_repo
        .recommended(&student.interested_categories)
        .await?;

    let mut response = Vec::new();
    for course in courses {
        response.push(course_response(course, ExpandDepth::Deep, true).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Get course by ID
#[utoipa::path(
    get,
    path = "/course/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course retrieved", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    Path(course_id): Path<i32>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course_repo = CourseRepository::new();

    let course = course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let response = course_response(course, ExpandDepth::Deep, true).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Courses owned by a teacher
#[utoipa::path(
    get,
    path = "/teacher-courses/{teacher_id}",
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher courses", body = [CourseResponse]),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn teacher_courses(
    Path(teacher_id): Path<i32>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), ApiError> {
    let teacher_repo = TeacherRepository::new();
    teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;

    let course_repo = CourseRepository::new();
    let courses = course_repo.find_by_teacher(teacher_id).await?;

    let mut response = Vec::new();
    for course in courses {
        response.push(course_response(course, ExpandDepth::Deep, true).await?);
    }

    Ok((StatusCode::OK, Json(response)))
}

/// Get course by ID (teacher management view)
#[utoipa::path(
    get,
    path = "/teacher-course-detail/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course retrieved", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_teacher_course(
    Path(course_id): Path<i32>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    get_course(Path(course_id)).await
}

/// Create a course
#[utoipa::path(
    post,
    path = "/course/",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Referenced category or teacher does not exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let category_repo = CategoryRepository::new();
    if category_repo.find_by_id(payload.category).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Category {} does not exist",
            payload.category
        )));
    }

    let teacher_repo = TeacherRepository::new();
    if teacher_repo.find_by_id(payload.teacher).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Teacher {} does not exist",
            payload.teacher
        )));
    }

    let course_repo = CourseRepository::new();
    let course = course_repo
        .create(
            payload.category,
            payload.teacher,
            payload.title,
            payload.description,
            payload.featured_img,
            payload.techs.unwrap_or_default(),
        )
        .await?;

    let response = course_response(course, ExpandDepth::Flat, false).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Update course (full or partial)
#[utoipa::path(
    put,
    path = "/teacher-course-detail/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Referenced category or teacher does not exist"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    Path(course_id): Path<i32>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    if let Some(category_id) = payload.category {
        let category_repo = CategoryRepository::new();
        if category_repo.find_by_id(category_id).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "Category {category_id} does not exist"
            )));
        }
    }

    if let Some(teacher_id) = payload.teacher {
        let teacher_repo = TeacherRepository::new();
        if teacher_repo.find_by_id(teacher_id).await?.is_none() {
            return Err(ApiError::Validation(format!(
                "Teacher {teacher_id} does not exist"
            )));
        }
    }

    let updates = CourseUpdate {
        category_id: payload.category,
        teacher_id: payload.teacher,
        title: payload.title,
        description: payload.description,
        featured_img: payload.featured_img,
        techs: payload.techs,
    };

    let course_repo = CourseRepository::new();
    let updated = course_repo
        .update(course_id, updates)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let response = course_response(updated, ExpandDepth::Flat, false).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete course
#[utoipa::path(
    delete,
    path = "/teacher-course-detail/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn delete_course(Path(course_id): Path<i32>) -> Result<StatusCode, ApiError> {
    let course_repo = CourseRepository::new();

    let deleted = course_repo.delete(course_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Course not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
