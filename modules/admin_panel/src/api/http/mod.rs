//! Remote client over the REST API

pub mod client;

pub use client::HttpSettingsClient;
