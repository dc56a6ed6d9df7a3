//! Bearer token authentication
//!
//! Resolves `Authorization: Bearer <token>` against the configured tokens and
//! attaches the resulting `AuthContext` to the request. Unknown or missing
//! tokens yield an anonymous context; the settings API rejects those itself.

use crate::config::AuthConfig;
use admin_panel::AuthContext;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TokenAuthenticator {
    tokens: Arc<HashMap<String, AuthContext>>,
}

impl TokenAuthenticator {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .tokens
            .iter()
            .map(|t| {
                (
                    t.token.clone(),
                    AuthContext::user(t.user_id.clone(), t.capabilities.iter().cloned()),
                )
            })
            .collect();
        Self {
            tokens: Arc::new(tokens),
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn resolve(&self, headers: &HeaderMap) -> AuthContext {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .and_then(|token| self.tokens.get(token.trim()))
            .cloned()
            .unwrap_or_else(AuthContext::anonymous)
    }
}

pub async fn authenticate(
    State(auth): State<TokenAuthenticator>,
    mut request: Request,
    next: Next,
) -> Response {
    let ctx = auth.resolve(request.headers());
    tracing::debug!(principal = ctx.principal(), "request authenticated");
    request.extensions_mut().insert(ctx);
    next.run(request).await
}
