//! Caller extraction
//!
//! The host authenticates the request and inserts an `AuthContext` extension.
//! Requests without one are treated as anonymous and fail the capability gate.

use crate::contract::AuthContext;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Authenticated caller of a REST handler
#[derive(Debug, Clone)]
pub struct Caller(pub AuthContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_else(AuthContext::anonymous);
        Ok(Caller(ctx))
    }
}
