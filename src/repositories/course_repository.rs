use std::sync::Arc;

use anyhow::Result;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::course;
use crate::static_service::require_connection;
use crate::utils::tags::split_tags;

/// Optional query selectors for the course collection.
///
/// Selectors are checked in declaration order and a later match rebuilds the
/// query from the whole collection, discarding whatever an earlier selector
/// produced. `skill_teacher` therefore beats `category`, which beats `result`.
#[derive(Debug, Default)]
pub struct CourseSelectors {
    /// Newest N courses, descending id.
    pub result: Option<u64>,
    /// Substring match against the comma-delimited techs field.
    pub category: Option<String>,
    /// Skill term plus resolved teacher id, both must match.
    pub skill_teacher: Option<(String, i32)>,
}

pub struct CourseRepository {
    db: Arc<DatabaseConnection>,
}

impl CourseRepository {
    pub fn new() -> Self {
        Self {
            db: require_connection(),
        }
    }

    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn list(&self, selectors: CourseSelectors) -> Result<Vec<course::Model>> {
        let mut query = course::Entity::find();

        if let Some(limit) = selectors.result {
            query = course::Entity::find()
                .order_by_desc(course::Column::Id)
                .limit(limit);
        }

        if let Some(category) = selectors.category {
            query = course::Entity::find().filter(techs_contains(&category));
        }

        if let Some((skill, teacher_id)) = selectors.skill_teacher {
            query = course::Entity::find()
                .filter(techs_contains(&skill))
                .filter(course::Column::TeacherId.eq(teacher_id));
        }

        let courses = query.all(self.db.as_ref()).await?;
        Ok(courses)
    }

    /// Case-insensitive substring match over title OR techs.
    pub async fn search(&self, term: &str) -> Result<Vec<course::Model>> {
        let courses = course::Entity::find()
            .filter(
                Condition::any()
                    .add(title_contains(term))
                    .add(techs_contains(term)),
            )
            .all(self.db.as_ref())
            .await?;
        Ok(courses)
    }

    /// Courses whose techs end with any of the student's interests.
    /// An empty interest list yields an empty result without touching the
    /// database.
    pub async fn recommended(&self, interested_categories: &str) -> Result<Vec<course::Model>> {
        let interests = split_tags(interested_categories);
        if interests.is_empty() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::any();
        for interest in &interests {
            condition = condition.add(techs_ends_with(interest));
        }

        let courses = course::Entity::find()
            .filter(condition)
            .all(self.db.as_ref())
            .await?;
        Ok(courses)
    }

    /// Courses sharing the given techs string, substring matched.
    pub async fn related(&self, techs: &str) -> Result<Vec<course::Model>> {
        let courses = course::Entity::find()
            .filter(techs_contains(techs))
            .all(self.db.as_ref())
            .await?;
        Ok(courses)
    }

    pub async fn find_by_teacher(&self, teacher_id: i32) -> Result<Vec<course::Model>> {
        let courses = course::Entity::find()
            .filter(course::Column::TeacherId.eq(teacher_id))
            .all(self.db.as_ref())
            .await?;
        Ok(courses)
    }

    pub async fn count_by_teacher(&self, teacher_id: i32) -> Result<u64> {
        let count = course::Entity::find()
            .filter(course::Column::TeacherId.eq(teacher_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    pub async fn find_by_id(&self, course_id: i32) -> Result<Option<course::Model>> {
        let course = course::Entity::find_by_id(course_id)
            .one(self.db.as_ref())
            .await?;
        Ok(course)
    }

    pub async fn create(
        &self,
        category_id: i32,
        teacher_id: i32,
        title: String,
        description: String,
        featured_img: Option<String>,
        techs: String,
    ) -> Result<course::Model> {
        let model = course::ActiveModel {
            category_id: Set(category_id),
            teacher_id: Set(teacher_id),
            title: Set(title),
            description: Set(description),
            featured_img: Set(featured_img),
            techs: Set(techs),
            ..Default::default()
        };

        let result = model.insert(self.db.as_ref()).await?;
        Ok(result)
    }

    pub async fn update(&self, course_id: i32, updates: CourseUpdate) -> Result<Option<course::Model>> {
        let Some(course) = self.find_by_id(course_id).await? else {
            return Ok(None);
        };

        let mut active_course: course::ActiveModel = course.into();

        if let Some(category_id) = updates.category_id {
            active_course.category_id = Set(category_id);
        }
        if let Some(teacher_id) = updates.teacher_id {
            active_course.teacher_id = Set(teacher_id);
        }
        if let Some(title) = updates.title {
            active_course.title = Set(title);
        }
        if let Some(description) = updates.description {
            active_course.description = Set(description);
        }
        if let Some(featured_img) = updates.featured_img {
            active_course.featured_img = Set(Some(featured_img));
        }
        if let Some(techs) = updates.techs {
            active_course.techs = Set(techs);
        }

        let result = active_course.update(self.db.as_ref()).await?;
        Ok(Some(result))
    }

    pub async fn delete(&self, course_id: i32) -> Result<bool> {
        let result = course::Entity::delete_by_id(course_id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[derive(Default)]
pub struct CourseUpdate {
    pub category_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub featured_img: Option<String>,
    pub techs: Option<String>,
}

fn title_contains(term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((course::Entity, course::Column::Title))))
        .like(format!("%{}%", term.to_lowercase()))
}

fn techs_contains(term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((course::Entity, course::Column::Techs))))
        .like(format!("%{}%", term.to_lowercase()))
}

fn techs_ends_with(term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((course::Entity, course::Column::Techs))))
        .like(format!("%{}", term.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_course(id: i32, title: &str, techs: &str) -> course::Model {
        course::Model {
            id,
            category_id: 1,
            teacher_id: 1,
            title: title.to_string(),
            description: "desc".to_string(),
            featured_img: None,
            techs: techs.to_string(),
        }
    }

    async fn run_and_log<F, Fut>(rows: Vec<course::Model>, run: F) -> String
    where
        F: FnOnce(CourseRepository) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([rows])
                .into_connection(),
        );

        run(CourseRepository::with_connection(db.clone())).await;

        let conn = Arc::try_unwrap(db).expect("repository still holds the connection");
        format!("{:?}", conn.into_transaction_log())
    }

    #[tokio::test]
    async fn list_without_selectors_returns_whole_collection() {
        let rows = vec![test_course(1, "Rust", "rust"), test_course(2, "Go", "go")];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([rows])
                .into_connection(),
        );

        let repo = CourseRepository::with_connection(db);
        let courses = repo.list(CourseSelectors::default()).await.unwrap();

        assert_eq!(courses.len(), 2);
    }

    #[tokio::test]
    async fn result_selector_orders_descending_and_limits() {
        let sql = run_and_log(Vec::new(), |repo| async move {
            repo.list(CourseSelectors {
                result: Some(4),
                ..Default::default()
            })
            .await
            .unwrap();
        })
        .await;

        assert!(sql.contains("ORDER BY"));
        assert!(sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn category_selector_discards_result_limit() {
        let sql = run_and_log(Vec::new(), |repo| async move {
            repo.list(CourseSelectors {
                result: Some(4),
                category: Some("py".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        })
        .await;

        assert!(sql.contains("LOWER"));
        assert!(sql.contains("%py%"));
        assert!(!sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn skill_teacher_selector_beats_category() {
        let sql = run_and_log(Vec::new(), |repo| async move {
            repo.list(CourseSelectors {
                result: None,
                category: Some("java".to_string()),
                skill_teacher: Some(("django".to_string(), 9)),
            })
            .await
            .unwrap();
        })
        .await;

        assert!(sql.contains("%django%"));
        assert!(sql.contains("teacher_id"));
        assert!(!sql.contains("%java%"));
    }

    #[tokio::test]
    async fn search_matches_title_or_techs() {
        let sql = run_and_log(vec![test_course(1, "Foobar", "")], |repo| async move {
            let courses = repo.search("foo").await.unwrap();
            assert_eq!(courses.len(), 1);
        })
        .await;

        assert!(sql.contains("title"));
        assert!(sql.contains("techs"));
        assert!(sql.contains("OR"));
    }

    #[tokio::test]
    async fn recommended_with_empty_interests_skips_the_database() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );

        let repo = CourseRepository::with_connection(db);
        let courses = repo.recommended("").await.unwrap();

        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn recommended_builds_suffix_match_per_interest() {
        let sql = run_and_log(Vec::new(), |repo| async move {
            repo.recommended("ai,web").await.unwrap();
        })
        .await;

        assert!(sql.contains("%ai"));
        assert!(sql.contains("%web"));
        assert!(!sql.contains("%ai%"));
    }
}
