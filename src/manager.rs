/*
 * Responsibility
 * - Long-lived registry: config + the four overridable callbacks
 * - Token issuance (claim builder -> codec) and decoding
 * - Error-to-response mapping through the registered callbacks
 */
use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::error;

use crate::claims::{ClaimSet, default_claims};
use crate::codec::{decode_jwt, encode_jwt};
use crate::config::{ConfigError, JwtConfig};
use crate::error::{AuthError, MsgBody};
use crate::headers::raw_token_from_headers;

type ExpiredTokenCallback = Box<dyn Fn() -> Response + Send + Sync>;
type MessageCallback = Box<dyn Fn(&str) -> Response + Send + Sync>;
type JwtDataCallback = Box<dyn Fn(&JwtConfig, Value) -> ClaimSet + Send + Sync>;

/// Holds the JWT settings and callback bindings for one application.
///
/// Construct it once at startup, override callbacks as needed, then share
/// it as an `Arc<JwtManager>` with the gate middleware and any handlers that
/// issue tokens: explicit dependency injection, no process-global lookup.
///
/// The loader methods take `&mut self`: overriding is single-threaded setup
/// work. Once the manager is behind an `Arc` serving traffic the bindings
/// are read-only; reassigning them concurrently is not supported.
pub struct JwtManager {
    config: JwtConfig,
    expired_token_callback: ExpiredTokenCallback,
    invalid_token_callback: MessageCallback,
    unauthorized_callback: MessageCallback,
    jwt_data_callback: JwtDataCallback,
}

impl std::fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            config,
            expired_token_callback: Box::new(default_expired_token_response),
            invalid_token_callback: Box::new(default_invalid_token_response),
            unauthorized_callback: Box::new(default_unauthorized_response),
            jwt_data_callback: Box::new(default_claims),
        }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Issue a signed token for `identity` (anything JSON-representable)
    /// using the registered claim builder.
    pub fn create_jwt(&self, identity: impl Into<Value>) -> Result<String, ConfigError> {
        let claims = (self.jwt_data_callback)(&self.config, identity.into());
        encode_jwt(&self.config, &claims)
    }

    /// Decode and fully validate `token`. See [`crate::codec::decode_jwt`].
    pub fn decode_jwt(&self, token: &str) -> Result<ClaimSet, AuthError> {
        decode_jwt(&self.config, token)
    }

    /// Extract the token from `headers` and decode it. This is the whole
    /// verification path the gate middleware runs per request.
    pub fn decode_jwt_from_headers(&self, headers: &HeaderMap) -> Result<ClaimSet, AuthError> {
        let name = self.config.header_name()?;
        let token = raw_token_from_headers(headers, name, self.config.header_scheme())?;
        self.decode_jwt(token)
    }

    /// Override the response for an expired token.
    /// Default: `401 {"msg": "Token has expired"}`. Takes no message: expired
    /// tokens get a generic response regardless of detail.
    pub fn expired_token_loader(
        &mut self,
        callback: impl Fn() -> Response + Send + Sync + 'static,
    ) -> &mut Self {
        self.expired_token_callback = Box::new(callback);
        self
    }

    /// Override the response for an invalid token or malformed header,
    /// receiving the reason. Default: `422 {"msg": <reason>}`.
    pub fn invalid_token_loader(
        &mut self,
        callback: impl Fn(&str) -> Response + Send + Sync + 'static,
    ) -> &mut Self {
        self.invalid_token_callback = Box::new(callback);
        self
    }

    /// Override the response when no credentials are presented, receiving
    /// the reason. Default: `401 {"msg": <reason>}`.
    pub fn unauthorized_loader(
        &mut self,
        callback: impl Fn(&str) -> Response + Send + Sync + 'static,
    ) -> &mut Self {
        self.unauthorized_callback = Box::new(callback);
        self
    }

    /// Replace the claim builder used by [`create_jwt`](Self::create_jwt).
    /// The replacement owns the entire claim set: the defaults
    /// (`exp`/`iat`/`nbf`/identity) are not merged back in, and omitting
    /// `exp` is accepted silently; such tokens then fail decoding, which
    /// requires it.
    pub fn jwt_data_loader(
        &mut self,
        callback: impl Fn(&JwtConfig, Value) -> ClaimSet + Send + Sync + 'static,
    ) -> &mut Self {
        self.jwt_data_callback = Box::new(callback);
        self
    }

    /// Map a failed authentication attempt to its final HTTP response.
    pub fn error_response(&self, err: &AuthError) -> Response {
        match err {
            AuthError::NoAuthorization(msg) => (self.unauthorized_callback)(msg),
            AuthError::InvalidHeader(msg) => (self.invalid_token_callback)(msg),
            AuthError::InvalidToken(msg) => (self.invalid_token_callback)(msg),
            AuthError::ExpiredToken => (self.expired_token_callback)(),
            AuthError::Config(e) => {
                // Not a client problem: bad deploy-time configuration hit at
                // request time. Keep the body generic.
                error!(error = %e, "JWT configuration error while handling a request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MsgBody::new("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}

fn default_expired_token_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(MsgBody::new("Token has expired")),
    )
        .into_response()
}

fn default_invalid_token_response(msg: &str) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(MsgBody::new(msg))).into_response()
}

fn default_unauthorized_response(msg: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(MsgBody::new(msg))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret_key: Some("testing_secret_key".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn issue_and_decode_through_the_manager() {
        let manager = manager();
        let token = manager.create_jwt("username").unwrap();
        let claims = manager.decode_jwt(&token).unwrap();
        assert_eq!(claims["sub"], json!("username"));
    }

    #[test]
    fn default_response_statuses() {
        let manager = manager();
        let expired = manager.error_response(&AuthError::ExpiredToken);
        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);

        let invalid =
            manager.error_response(&AuthError::InvalidToken("Test error".to_string()));
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let unauthorized =
            manager.error_response(&AuthError::NoAuthorization("Test error".to_string()));
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let bad_header =
            manager.error_response(&AuthError::InvalidHeader("Test error".to_string()));
        assert_eq!(bad_header.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let config = manager.error_response(&AuthError::Config(ConfigError::Missing(
            "JWT_SECRET_KEY",
        )));
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn overridden_callbacks_take_effect() {
        let mut manager = manager();
        manager
            .expired_token_loader(|| {
                (StatusCode::OK, Json(MsgBody::new("custom"))).into_response()
            })
            .invalid_token_loader(|_| StatusCode::IM_A_TEAPOT.into_response())
            .unauthorized_loader(|_| StatusCode::FORBIDDEN.into_response());

        assert_eq!(
            manager.error_response(&AuthError::ExpiredToken).status(),
            StatusCode::OK
        );
        assert_eq!(
            manager
                .error_response(&AuthError::InvalidToken("x".to_string()))
                .status(),
            StatusCode::IM_A_TEAPOT
        );
        assert_eq!(
            manager
                .error_response(&AuthError::NoAuthorization("x".to_string()))
                .status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn custom_claim_builder_replaces_defaults_entirely() {
        let mut manager = manager();
        manager.jwt_data_loader(|_config, identity| {
            let mut claims = ClaimSet::new();
            claims.insert("user".to_string(), identity);
            claims
        });
        let token = manager.create_jwt("username").unwrap();

        // No exp was emitted, so the decode side rejects it by name.
        match manager.decode_jwt(&token) {
            Err(AuthError::InvalidToken(msg)) => {
                assert_eq!(msg, "Token is missing the \"exp\" claim")
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn create_jwt_without_signing_material() {
        let manager = JwtManager::new(JwtConfig::default());
        assert_eq!(
            manager.create_jwt("username").unwrap_err(),
            ConfigError::Missing("JWT_SECRET_KEY")
        );
    }

    #[test]
    fn decode_from_headers_runs_the_full_path() {
        let manager = manager();
        let token = manager.create_jwt("username").unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        let claims = manager.decode_jwt_from_headers(&headers).unwrap();
        assert_eq!(claims["sub"], json!("username"));

        assert!(matches!(
            manager.decode_jwt_from_headers(&HeaderMap::new()),
            Err(AuthError::NoAuthorization(_))
        ));
    }
}
