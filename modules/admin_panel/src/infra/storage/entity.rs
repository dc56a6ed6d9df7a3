//! SeaORM entity for the options table

use sea_orm::entity::prelude::*;

/// Options table entity: one row per named JSON document
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "options")]
pub struct Model {
    /// Option name (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub option_name: String,

    /// Option value as JSON
    pub option_value: Json,

    /// Last write timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
