//! The access gates: middleware that runs extraction and verification in
//! front of a protected handler and short-circuits to an error response
//! when they fail.
//!
//! Wiring follows the usual `from_fn_with_state` pattern:
//!
//! ```ignore
//! let api = Router::new().route("/protected", get(handler));
//! let api = middleware::access::require_jwt(api, manager.clone());
//! app = app.nest("/api", api);
//! ```

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use tracing::warn;

use crate::error::AuthError;
use crate::extract::JwtCtx;
use crate::manager::JwtManager;

/// Gate every route of `router` behind mandatory JWT verification.
pub fn require_jwt<S>(router: Router<S>, manager: Arc<JwtManager>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(manager, jwt_required))
}

/// Gate every route of `router` behind optional JWT verification: requests
/// without credentials pass through, invalid or expired ones do not.
pub fn optional_jwt<S>(router: Router<S>, manager: Arc<JwtManager>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(manager, jwt_optional))
}

/// Mandatory gate. Any extraction or verification failure produces the
/// mapped error response and the handler never runs.
pub async fn jwt_required(
    State(manager): State<Arc<JwtManager>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match manager.decode_jwt_from_headers(req.headers()) {
        Ok(claims) => {
            let ctx = JwtCtx::new(claims, manager.config().identity_claim.clone());
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        Err(err) => {
            warn!(error = %err, "JWT verification failed");
            manager.error_response(&err)
        }
    }
}

/// Optional gate. Missing or malformed credentials are tolerated and the
/// handler runs with no context stored (its extractor sees the empty
/// context); an expired or otherwise invalid token still blocks the
/// request. Missing credentials are a choice, bad credentials are not.
pub async fn jwt_optional(
    State(manager): State<Arc<JwtManager>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match manager.decode_jwt_from_headers(req.headers()) {
        Ok(claims) => {
            let ctx = JwtCtx::new(claims, manager.config().identity_claim.clone());
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        Err(AuthError::NoAuthorization(_)) | Err(AuthError::InvalidHeader(_)) => {
            next.run(req).await
        }
        Err(err) => {
            warn!(error = %err, "JWT verification failed");
            manager.error_response(&err)
        }
    }
}
