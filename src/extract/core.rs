use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::JwtCtx;

/// Extractor for handlers: yields the context the gate middleware stored in
/// the request extensions. When nothing was stored (optional gate, or a
/// route without any gate) it yields the empty context instead of rejecting,
/// so `ctx.identity()` is simply `None` there.
impl<S> FromRequestParts<S> for JwtCtx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<JwtCtx>()
            .cloned()
            .unwrap_or_default())
    }
}
