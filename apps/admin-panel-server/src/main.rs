mod auth;
mod config;
mod logging;

use admin_panel::AdminPanelModule;
use anyhow::{Context, Result};
use axum::{middleware, routing::get, Json, Router};
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::auth::TokenAuthenticator;
use crate::config::{AppConfig, CliOverrides, DatabaseConfig, MOCK_DATABASE_URL};

/// Admin Panel Server - settings document API for the admin screen
#[derive(Parser)]
#[command(name = "admin-panel-server")]
#[command(about = "Admin Panel Server - settings document API for the admin screen")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
        }
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    });

    logging::init_logging(&config.logging);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config
        .bind_address()
        .context("server.bind_addr/server.port do not form a socket address")?;
    if config.auth.tokens.is_empty() {
        tracing::warn!("no auth tokens configured; every settings request will be rejected");
    }
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    if config.url == MOCK_DATABASE_URL {
        tracing::info!("Mock mode enabled: using in-memory SQLite");
        // An in-memory database lives only as long as its single connection
        let forever = Duration::from_secs(60 * 60 * 24 * 365);
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(forever)
            .max_lifetime(forever);
    }

    Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to database '{}'", config.url))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

fn build_router(module: &AdminPanelModule, authenticator: TokenAuthenticator) -> Router {
    module
        .register_rest(Router::new())
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(
            authenticator,
            auth::authenticate,
        ))
        .layer(TraceLayer::new_for_http())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Admin Panel Server starting");

    let db = connect_database(&config.database).await?;
    AdminPanelModule::migrate(&db).await?;
    let module = AdminPanelModule::init(config.admin_panel.clone(), db)?;

    let authenticator = TokenAuthenticator::from_config(&config.auth);
    tracing::info!(tokens = authenticator.token_count(), "Bearer tokens loaded");

    let app = build_router(&module, authenticator);

    let addr = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Admin Panel Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, TokenConfig};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliOverrides {
            mock: true,
            ..CliOverrides::default()
        });

        let db = connect_database(&config.database).await.unwrap();
        AdminPanelModule::migrate(&db).await.unwrap();
        let module = AdminPanelModule::init(config.admin_panel, db).unwrap();

        let authenticator = TokenAuthenticator::from_config(&AuthConfig {
            tokens: vec![TokenConfig {
                token: "secret".to_owned(),
                user_id: "admin".to_owned(),
                capabilities: vec!["manage_options".to_owned()],
            }],
        });
        build_router(&module, authenticator)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn settings_require_a_known_token() {
        let app = test_app().await;

        let anonymous = app
            .clone()
            .oneshot(Request::get("/settings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(anonymous).await["code"], "rest_forbidden");

        let admin = app
            .oneshot(
                Request::get("/settings")
                    .header(header::AUTHORIZATION, "Bearer secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(admin.status(), StatusCode::OK);
        assert_eq!(
            body_json(admin).await["appearance"]["admin_color"],
            "#ffffff"
        );
    }

    #[tokio::test]
    async fn mock_database_keeps_writes() {
        let app = test_app().await;
        let mut doc = admin_panel::domain::store::default_document();
        doc["general"]["site_title"] = json!("In memory");

        let post = app
            .clone()
            .oneshot(
                Request::post("/settings")
                    .header(header::AUTHORIZATION, "Bearer secret")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(doc.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(post.status(), StatusCode::OK);

        let get = app
            .oneshot(
                Request::get("/settings")
                    .header(header::AUTHORIZATION, "Bearer secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(get).await, doc);
    }

    #[test]
    fn check_rejects_bad_bind_address() {
        let mut config = AppConfig::default();
        config.server.bind_addr = "not an address".to_owned();
        assert!(check_config(&config).is_err());
    }
}
