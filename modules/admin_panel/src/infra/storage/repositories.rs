//! SeaORM repository implementation

use crate::domain::repository::OptionRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait};
use serde_json::Value;
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmOptionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOptionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OptionRepository for SeaOrmOptionRepository {
    async fn find(&self, name: &str) -> Result<Option<Value>> {
        let result = entity::Entity::find_by_id(name.to_owned())
            .one(&*self.db)
            .await
            .with_context(|| format!("loading option '{}'", name))?;

        Ok(result.map(Value::from))
    }

    async fn upsert(&self, name: &str, value: &Value) -> Result<()> {
        // Single INSERT .. ON CONFLICT statement, so a write is never observed half-applied
        entity::Entity::insert(mapper::to_active_model(name, value))
            .on_conflict(
                OnConflict::column(entity::Column::OptionName)
                    .update_columns([entity::Column::OptionValue, entity::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .with_context(|| format!("writing option '{}'", name))?;

        Ok(())
    }
}
