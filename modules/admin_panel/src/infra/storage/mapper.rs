//! Conversions between option values and SeaORM active models

use super::entity;
use sea_orm::ActiveValue::Set;
use serde_json::Value;

/// Active model replacing the whole value of `name`
pub fn to_active_model(name: &str, value: &Value) -> entity::ActiveModel {
    entity::ActiveModel {
        option_name: Set(name.to_owned()),
        option_value: Set(value.clone()),
        updated_at: Set(chrono::Utc::now()),
    }
}

impl From<entity::Model> for Value {
    fn from(model: entity::Model) -> Self {
        model.option_value
    }
}
