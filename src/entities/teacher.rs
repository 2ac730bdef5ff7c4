//! `SeaORM` Entity for teacher table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "teacher"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub qualification: String,
    pub mobile_no: String,
    pub skills: String,
    pub profile_img: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    Id,
    FullName,
    Email,
    Password,
    Qualification,
    MobileNo,
    Skills,
    ProfileImg,
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
pub enum Relation {}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::Id => ColumnType::Integer.def(),
            Self::FullName => ColumnType::String(StringLen::None).def(),
            Self::Email => ColumnType::String(StringLen::None).def(),
            Self::Password => ColumnType::String(StringLen::None).def(),
            Self::Qualification => ColumnType::String(StringLen::None).def(),
            Self::MobileNo => ColumnType::String(StringLen::None).def(),
            Self::Skills => ColumnType::Text.def(),
            Self::ProfileImg => ColumnType::String(StringLen::None).def().null(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef")
    }
}

impl ActiveModelBehavior for ActiveModel {}
