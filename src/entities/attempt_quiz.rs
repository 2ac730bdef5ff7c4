//! `SeaORM` Entity for attempt_quiz table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "attempt_quiz"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id: i32,
    pub student_id: i32,
    pub quiz_id: i32,
    pub question_id: i32,
    pub right_ans: Option<String>,
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    Id,
    StudentId,
    QuizId,
    QuestionId,
    RightAns,
    AddTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    Id,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = i32;
    fn auto_increment() -> bool {
        true
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Quiz,
    Question,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::Id => ColumnType::Integer.def(),
            Self::StudentId => ColumnType::Integer.def(),
            Self::QuizId => ColumnType::Integer.def(),
            Self::QuestionId => ColumnType::Integer.def(),
            Self::RightAns => ColumnType::String(StringLen::None).def().null(),
            Self::AddTime => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(super::student::Entity)
                .from(Column::StudentId)
                .to(super::student::Column::Id)
                .into(),
            Self::Quiz => Entity::belongs_to(super::quiz::Entity)
                .from(Column::QuizId)
                .to(super::quiz::Column::Id)
                .into(),
            Self::Question => Entity::belongs_to(super::quiz_question::Entity)
                .from(Column::QuestionId)
                .to(super::quiz_question::Column::Id)
                .into(),
        }
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::quiz_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
