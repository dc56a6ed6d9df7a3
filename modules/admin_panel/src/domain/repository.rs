//! Repository trait for option storage
//!
//! An option is a named JSON value. The implementation lives in
//! infra/storage/repositories.rs.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Key-value repository for named JSON documents
#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// Find an option value by name
    async fn find(&self, name: &str) -> Result<Option<Value>>;

    /// Create or fully replace an option value in a single write
    async fn upsert(&self, name: &str, value: &Value) -> Result<()>;
}
