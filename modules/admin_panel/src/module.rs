//! Module declaration and lifecycle
//!
//! Builds the store, service and clients from a database handle and exposes
//! the REST router and migrations to the hosting server.

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::{AuthContext, SettingsApi};
use crate::domain::store::default_document;
use crate::domain::{OptionRepository, Service, ServiceConfig, SettingsStore};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmOptionRepository;
use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Admin panel module
pub struct AdminPanelModule {
    config: Config,
    store: Arc<SettingsStore>,
    service: Arc<Service>,
}

impl AdminPanelModule {
    /// Initialize the module on top of a migrated database
    pub fn init(config: Config, db: DatabaseConnection) -> Result<Self> {
        let repo = Arc::new(SeaOrmOptionRepository::new(Arc::new(db)));
        Self::with_repository(config, repo)
    }

    /// Initialize the module on top of any option repository
    pub fn with_repository(config: Config, repo: Arc<dyn OptionRepository>) -> Result<Self> {
        let store = Arc::new(SettingsStore::new(repo, config.option_name.clone()));
        // Idempotent: later registrations are ignored
        store.register_default(default_document());

        let service = Service::new(store.clone(), ServiceConfig::from(&config))
            .context("failed to build settings service")?;

        tracing::info!(
            option = %config.option_name,
            capability = %config.required_capability,
            strict_validation = config.strict_validation,
            "Admin panel module initialized"
        );

        Ok(Self {
            config,
            store,
            service: Arc::new(service),
        })
    }

    /// Run database migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .context("admin panel migrations failed")?;
        tracing::info!("Admin panel migrations completed");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> Arc<SettingsStore> {
        self.store.clone()
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client acting as `ctx`
    pub fn native_client(&self, ctx: AuthContext) -> Arc<dyn SettingsApi> {
        Arc::new(NativeClient::new(self.service.clone(), ctx))
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering admin panel REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}
