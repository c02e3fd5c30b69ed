//! jwt-gate: simple JWT request authentication for [`axum`].
//!
//! Issues signed, time-bounded identity tokens, verifies tokens pulled from
//! a configurable HTTP header, and gates protected handlers behind that
//! verification. Decoded claims land in a request-scoped [`JwtCtx`] the
//! handler extracts; every failure kind maps to an overridable HTTP
//! response.
//!
//! Out of scope by design: token storage/revocation, refresh flows, key
//! rotation, sessions, rate limiting.
//!
//! # Getting started
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use axum::extract::State;
//! use axum::http::StatusCode;
//! use axum::routing::{get, post};
//! use axum::{Json, Router};
//! use jwt_gate::{JwtConfig, JwtCtx, JwtManager, require_jwt};
//! use serde_json::{Value, json};
//!
//! async fn login(State(manager): State<Arc<JwtManager>>) -> Result<Json<Value>, StatusCode> {
//!     // Real code authenticates the user first.
//!     let token = manager
//!         .create_jwt("username")
//!         .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
//!     Ok(Json(json!({ "jwt": token })))
//! }
//!
//! async fn protected(ctx: JwtCtx) -> Json<Value> {
//!     Json(json!({ "hello_from": ctx.identity() }))
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = Arc::new(JwtManager::new(JwtConfig {
//!         secret_key: Some("change-me".to_string()),
//!         ..Default::default()
//!     }));
//!
//!     let gated = require_jwt(
//!         Router::new().route("/protected", get(protected)),
//!         manager.clone(),
//!     );
//!
//!     let app = Router::new()
//!         .route("/login", post(login))
//!         .merge(gated)
//!         .with_state(manager);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Optional authentication
//!
//! [`optional_jwt`] runs the handler even when the request carries no
//! credentials; `ctx.identity()` is then `None`. Expired or invalid tokens
//! are still rejected; only *absent* credentials are tolerated.
//!
//! # Changing the error responses and token contents
//!
//! All four behaviors are plain function fields on the manager, overridden
//! before the manager is shared:
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum::response::IntoResponse;
//! use jwt_gate::{ClaimSet, JwtConfig, JwtManager};
//!
//! let mut manager = JwtManager::new(JwtConfig {
//!     secret_key: Some("change-me".to_string()),
//!     ..Default::default()
//! });
//! manager
//!     .expired_token_loader(|| {
//!         (StatusCode::UNAUTHORIZED, "please log in again").into_response()
//!     })
//!     .jwt_data_loader(|config, identity| {
//!         let mut claims = jwt_gate::default_claims(config, identity);
//!         claims.insert("aud".to_string(), "my-service".into());
//!         claims
//!     });
//! ```
//!
//! # Concurrency
//!
//! The manager is read-only at request time and safe to share across any
//! number of in-flight requests. Callback overriding is setup-phase work;
//! reassigning loaders while traffic is running is not supported (the
//! `&mut self` signatures make that hard to do by accident).

pub mod claims;
pub mod codec;
pub mod config;
pub mod error;
pub mod extract;
pub mod headers;
pub mod manager;
pub mod middleware;

pub use claims::{ClaimSet, default_claims};
pub use codec::{decode_jwt, encode_jwt};
pub use config::{ConfigError, JwtConfig};
pub use error::{AuthError, MsgBody};
pub use extract::JwtCtx;
pub use headers::raw_token_from_headers;
pub use manager::JwtManager;
pub use middleware::{jwt_optional, jwt_required, optional_jwt, require_jwt};
