//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    auth::Caller,
    dto::{ErrorResponse, SettingsDto},
};
use crate::domain::Service;
use axum::{body::Bytes, extract::rejection::BytesRejection, Extension, Json};
use serde_json::Value;
use std::sync::Arc;

/// Get the settings document
#[utoipa::path(
    get,
    path = "/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Stored settings, or defaults when nothing was saved", body = SettingsDto),
        (status = 403, description = "Caller lacks the required capability", body = ErrorResponse),
    )
)]
pub async fn get_settings(
    Extension(service): Extension<Arc<Service>>,
    Caller(ctx): Caller,
) -> Result<Json<Value>, ErrorResponse> {
    let settings = service.get_settings(&ctx).await?;
    Ok(Json(settings))
}

/// Replace the settings document
#[utoipa::path(
    post,
    path = "/settings",
    tag = "Settings",
    request_body = SettingsDto,
    responses(
        (status = 200, description = "Document written", body = SettingsDto),
        (status = 400, description = "Malformed settings document", body = ErrorResponse),
        (status = 403, description = "Caller lacks the required capability", body = ErrorResponse),
        (status = 413, description = "Document exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Store did not accept the write", body = ErrorResponse),
    )
)]
pub async fn update_settings(
    Extension(service): Extension<Arc<Service>>,
    Caller(ctx): Caller,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ErrorResponse> {
    let body = body?;
    let settings = service.update_settings_from_bytes(&ctx, &body).await?;
    Ok(Json(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rest::routes::register_routes;
    use crate::contract::AuthContext;
    use crate::domain::store::default_document;
    use crate::domain::{ServiceConfig, SettingsStore};
    use crate::test_support::MemoryRepo;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::json;
    use tower::ServiceExt as _;

    fn create_test_router(repo: Arc<MemoryRepo>, ctx: Option<AuthContext>) -> Router {
        create_test_router_with(repo, ctx, ServiceConfig::default())
    }

    fn create_test_router_with(
        repo: Arc<MemoryRepo>,
        ctx: Option<AuthContext>,
        config: ServiceConfig,
    ) -> Router {
        let store = Arc::new(SettingsStore::new(repo, "wrp_settings"));
        let service = Arc::new(Service::new(store, config).unwrap());
        let router = register_routes(Router::new(), service);
        match ctx {
            Some(ctx) => router.layer(Extension(ctx)),
            None => router,
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/settings")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_settings_returns_defaults_for_empty_store() {
        let app = create_test_router(
            Arc::new(MemoryRepo::default()),
            Some(AuthContext::administrator("admin")),
        );

        let request = Request::builder()
            .method("GET")
            .uri("/settings")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, default_document());
    }

    #[tokio::test]
    async fn test_post_settings_echoes_written_document() {
        let repo = Arc::new(MemoryRepo::default());
        let app = create_test_router(repo.clone(), Some(AuthContext::administrator("admin")));

        let mut doc = default_document();
        doc["general"]["site_title"] = json!("My Site");

        let response = app.oneshot(post(doc.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, doc);
        assert_eq!(repo.get("wrp_settings"), Some(doc));
    }

    #[tokio::test]
    async fn test_anonymous_requests_are_forbidden_without_store_access() {
        let repo = Arc::new(MemoryRepo::default());
        let app = create_test_router(repo.clone(), None);

        let request = Request::builder()
            .method("GET")
            .uri("/settings")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(post(default_document().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(json["code"], "rest_forbidden");

        assert_eq!(repo.reads(), 0);
        assert_eq!(repo.get("wrp_settings"), None);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = create_test_router(
            Arc::new(MemoryRepo::default()),
            Some(AuthContext::administrator("admin")),
        );

        let response = app.oneshot(post("{not json".to_owned())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "rest_invalid_param");
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_message() {
        let repo = Arc::new(MemoryRepo::default());
        repo.fail_writes(true);
        let app = create_test_router(repo, Some(AuthContext::administrator("admin")));

        let response = app
            .oneshot(post(default_document().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Failed to update settings");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_settings_path() {
        let app = create_test_router(Arc::new(MemoryRepo::default()), None);

        let request = Request::builder()
            .method("GET")
            .uri("/openapi.json")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["paths"]["/settings"]["get"].is_object());
        assert!(json["paths"]["/settings"]["post"].is_object());
    }

    #[tokio::test]
    async fn test_body_limit_follows_max_data_size() {
        let repo = Arc::new(MemoryRepo::default());
        let config = ServiceConfig {
            max_data_size: 8 * 1024 * 1024,
            ..ServiceConfig::default()
        };
        let app = create_test_router_with(
            repo.clone(),
            Some(AuthContext::administrator("admin")),
            config,
        );

        // Larger than axum's built-in 2 MiB default
        let mut doc = default_document();
        doc["advanced"]["custom_css"] = json!("a".repeat(3 * 1024 * 1024));

        let response = app.oneshot(post(doc.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.get("wrp_settings"), Some(doc));
    }

    #[tokio::test]
    async fn test_oversized_body_gets_json_error() {
        let repo = Arc::new(MemoryRepo::default());
        let config = ServiceConfig {
            max_data_size: 1024,
            ..ServiceConfig::default()
        };
        let app = create_test_router_with(
            repo.clone(),
            Some(AuthContext::administrator("admin")),
            config,
        );

        let mut doc = default_document();
        doc["advanced"]["custom_js"] = json!("x".repeat(4096));

        let response = app.oneshot(post(doc.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json = body_json(response).await;
        assert_eq!(json["code"], "rest_payload_too_large");
        assert_eq!(json["status"], 413);
        assert!(json["message"].is_string());
        assert_eq!(repo.get("wrp_settings"), None);
    }
}
