//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod store;
pub mod validation;

pub use repository::OptionRepository;
pub use service::{Service, ServiceConfig};
pub use store::SettingsStore;
