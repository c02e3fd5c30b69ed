/*
 * Responsibility
 * - Request-time auth error taxonomy
 * - JSON body shape used by the default error responses
 *
 * ConfigError lives in config.rs: it is a deploy-time failure and is mapped
 * to a 500, never to a 4xx, so it stays out of this enum's message contract.
 */
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// `{"msg": ...}`, the body produced by every default error callback.
#[derive(Debug, Serialize)]
pub struct MsgBody {
    pub msg: String,
}

impl MsgBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Why a request failed authentication.
///
/// The `Display` text of each variant is exactly the message handed to the
/// corresponding error callback, so overriding a callback still sees the
/// same strings the defaults render.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credentials were presented at all. Tolerated by the optional gate.
    #[error("{0}")]
    NoAuthorization(String),
    /// The header was present but not in the expected
    /// `<Scheme> <token>` (or bare `<token>`) shape.
    #[error("{0}")]
    InvalidHeader(String),
    /// `exp` lies in the past. Carries no detail: expired tokens get a
    /// generic response no matter why they expired.
    #[error("Token has expired")]
    ExpiredToken,
    /// Signature, structure or audience failure, with the specific reason.
    #[error("{0}")]
    InvalidToken(String),
    /// Key material or settings could not be resolved while handling the
    /// request. A server-side bug, not a client error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
