//! Common test utilities: mock repositories and clients

#![allow(dead_code)]

use admin_panel::contract::{AuthContext, Settings, SettingsApi, SettingsError};
use admin_panel::domain::{OptionRepository, Service, ServiceConfig, SettingsStore};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

pub const OPTION_NAME: &str = "wrp_settings";

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// In-memory option repository with switchable failures
#[derive(Default)]
pub struct MockOptionRepo {
    data: RwLock<HashMap<String, Value>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockOptionRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn stored(&self) -> Option<Value> {
        self.data.read().get(OPTION_NAME).cloned()
    }

    pub fn seed(&self, value: Value) {
        self.data.write().insert(OPTION_NAME.to_owned(), value);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Print repository state, useful with `--nocapture`
    pub fn print_state(&self, context: &str) {
        let data = self.data.read();
        println!("\n========== OptionRepository State: {} ==========", context);
        if data.is_empty() {
            println!("  (empty)");
        }
        for (name, value) in data.iter() {
            println!(
                "  {}: {}",
                name,
                serde_json::to_string_pretty(value).unwrap_or_else(|_| "N/A".to_string())
            );
        }
        println!("====================================================\n");
    }
}

#[async_trait]
impl OptionRepository for MockOptionRepo {
    async fn find(&self, name: &str) -> anyhow::Result<Option<Value>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("simulated read failure");
        }
        Ok(self.data.read().get(name).cloned())
    }

    async fn upsert(&self, name: &str, value: &Value) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("simulated write failure");
        }
        // Yield so concurrent writers get a chance to interleave
        tokio::task::yield_now().await;
        self.data.write().insert(name.to_owned(), value.clone());
        Ok(())
    }
}

pub fn build_service(repo: Arc<MockOptionRepo>, config: ServiceConfig) -> Arc<Service> {
    let store = Arc::new(SettingsStore::new(repo, OPTION_NAME));
    Arc::new(Service::new(store, config).unwrap())
}

pub fn admin() -> AuthContext {
    AuthContext::administrator("admin")
}

/// Client whose calls block until the test releases them
pub struct GatedClient {
    pub saves: Mutex<Vec<Settings>>,
    started: mpsc::UnboundedSender<()>,
    release: Semaphore,
    fail_saves: AtomicBool,
}

impl GatedClient {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Arc::new(Self {
            saves: Mutex::new(Vec::new()),
            started: tx,
            release: Semaphore::new(0),
            fail_saves: AtomicBool::new(false),
        });
        (client, rx)
    }

    /// Let one blocked call complete
    pub fn release_one(&self) {
        self.release.add_permits(1);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    async fn gate(&self) {
        let _ = self.started.send(());
        if let Ok(permit) = self.release.acquire().await {
            permit.forget();
        }
    }
}

#[async_trait]
impl SettingsApi for GatedClient {
    async fn load(&self) -> Result<Settings, SettingsError> {
        self.gate().await;
        Ok(Settings::default())
    }

    async fn save(&self, settings: &Settings) -> Result<Settings, SettingsError> {
        self.saves.lock().push(settings.clone());
        self.gate().await;
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SettingsError::StoreWrite {
                message: "Failed to update settings".to_owned(),
            });
        }
        Ok(settings.clone())
    }
}

/// Client that fails every call with a transport error
pub struct UnreachableClient;

#[async_trait]
impl SettingsApi for UnreachableClient {
    async fn load(&self) -> Result<Settings, SettingsError> {
        Err(SettingsError::transport("connection refused"))
    }

    async fn save(&self, _settings: &Settings) -> Result<Settings, SettingsError> {
        Err(SettingsError::transport("connection refused"))
    }
}
