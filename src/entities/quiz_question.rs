//! `SeaORM` Entity for quiz_question table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "quiz_question"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id: i32,
    pub quiz_id: i32,
    pub questions: String,
    pub ans1: String,
    pub ans2: String,
    pub ans3: String,
    pub ans4: String,
    pub right_ans: String,
    pub add_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    Id,
    QuizId,
    Questions,
    Ans1,
    Ans2,
    Ans3,
    Ans4,
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
    Quiz,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::Id => ColumnType::Integer.def(),
            Self::QuizId => ColumnType::Integer.def(),
            Self::Questions => ColumnType::String(StringLen::None).def(),
            Self::Ans1 => ColumnType::String(StringLen::None).def(),
            Self::Ans2 => ColumnType::String(StringLen::None).def(),
            Self::Ans3 => ColumnType::String(StringLen::None).def(),
            Self::Ans4 => ColumnType::String(StringLen::None).def(),
            Self::RightAns => ColumnType::String(StringLen::None).def(),
            Self::AddTime => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Quiz => Entity::belongs_to(super::quiz::Entity)
                .from(Column::QuizId)
                .to(super::quiz::Column::Id)
                .into(),
        }
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
