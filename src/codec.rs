/*
 * Responsibility
 * - Sign a claim set into a compact token string
 * - Verify an incoming token (signature, exp/nbf window, audience) back
 *   into a claim set, mapping library failures onto AuthError
 */
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Header, Validation, decode, encode};
use tracing::error;

use crate::claims::ClaimSet;
use crate::config::{ConfigError, JwtConfig};
use crate::error::AuthError;

/// Serialize and sign `claims` under the configured key and algorithm.
///
/// Given valid configuration this always succeeds; absent or wrong-kind
/// signing material is a [`ConfigError`], never a token error.
pub fn encode_jwt(config: &JwtConfig, claims: &ClaimSet) -> Result<String, ConfigError> {
    let key = config.encoding_key()?;
    let header = Header::new(config.algorithm);
    encode(&header, claims, &key).map_err(|e| {
        error!(error = %e, "failed to sign JWT");
        if config.is_asymmetric() {
            ConfigError::Invalid("JWT_PRIVATE_KEY")
        } else {
            ConfigError::Invalid("JWT_SECRET_KEY")
        }
    })
}

/// Verify `token` and return its claim set.
///
/// Checks, in order: signature under the configured verification key and
/// algorithm, then `nbf <= now <= exp` (with the configured leeway), then
/// the audience when `decode_audience` is set. When no audience is
/// configured a token's `aud` claim is ignored entirely. Purely a function
/// of (token, config, current time); there is nothing to retry.
pub fn decode_jwt(config: &JwtConfig, token: &str) -> Result<ClaimSet, AuthError> {
    let key = config.decoding_key()?;

    let mut validation = Validation::new(config.algorithm);
    validation.leeway = config.leeway;
    validation.validate_nbf = true;
    match &config.decode_audience {
        Some(audience) => {
            validation.set_audience(&[audience]);
            // Makes an absent `aud` a MissingRequiredClaim, which is a
            // different failure than a mismatched one.
            validation.set_required_spec_claims(&["exp", "aud"]);
        }
        None => {
            validation.validate_aud = false;
            validation.set_required_spec_claims(&["exp"]);
        }
    }

    let data = decode::<ClaimSet>(token, &key, &validation).map_err(map_decode_error)?;
    Ok(data.claims)
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> AuthError {
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        ErrorKind::InvalidSignature => {
            AuthError::InvalidToken("Signature verification failed".to_string())
        }
        ErrorKind::InvalidAudience => AuthError::InvalidToken("Invalid audience".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => {
            AuthError::InvalidToken(format!("Token is missing the \"{claim}\" claim"))
        }
        ErrorKind::ImmatureSignature => {
            AuthError::InvalidToken("The token is not yet valid (nbf)".to_string())
        }
        // Wrong algorithm in the token header, bad base64, truncated parts…
        _ => AuthError::InvalidToken(e.to_string()),
    }
}
