//! In-memory option repository for unit tests

use crate::domain::OptionRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct MemoryRepo {
    data: RwLock<HashMap<String, Value>>,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
}

impl MemoryRepo {
    pub fn get(&self, name: &str) -> Option<Value> {
        self.data.read().get(name).cloned()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OptionRepository for MemoryRepo {
    async fn find(&self, name: &str) -> anyhow::Result<Option<Value>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(name))
    }

    async fn upsert(&self, name: &str, value: &Value) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("write rejected");
        }
        self.data.write().insert(name.to_owned(), value.clone());
        Ok(())
    }
}
