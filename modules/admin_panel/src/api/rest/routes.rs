//! Route registration

use super::{handlers, openapi::ApiDoc};
use crate::domain::Service;
use axum::{extract::DefaultBodyLimit, routing::get, Extension, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register the settings routes and the OpenAPI document.
///
/// Request bodies are capped at the service's `max_data_size`.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let body_limit = service.config().max_data_size;
    router
        .route(
            "/settings",
            get(handlers::get_settings)
                .post(handlers::update_settings)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/openapi.json", get(openapi_json))
        // Add service as extension for handlers
        .layer(Extension(service))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
