/*
 * Responsibility
 * - Pull the raw token string out of the configured HTTP header
 * - Enforce the `<Scheme> <token>` (or bare `<token>`) format exactly
 */
use axum::http::HeaderMap;

use crate::error::AuthError;

/// Extract the raw token from `headers`.
///
/// With an empty `scheme` the header value must be exactly one
/// whitespace-delimited token; otherwise exactly two, the first byte-equal
/// to `scheme` (case sensitive). An absent or empty header is
/// [`AuthError::NoAuthorization`]; any format deviation is
/// [`AuthError::InvalidHeader`] with the expected shape in the message.
pub fn raw_token_from_headers<'h>(
    headers: &'h HeaderMap,
    name: &str,
    scheme: &str,
) -> Result<&'h str, AuthError> {
    let bad_header = || {
        let expected = if scheme.is_empty() {
            "<JWT>".to_string()
        } else {
            format!("{scheme} <JWT>")
        };
        AuthError::InvalidHeader(format!("Bad {name} header. Expected value '{expected}'"))
    };

    let Some(raw) = headers.get(name) else {
        return Err(AuthError::NoAuthorization(format!("Missing {name} Header")));
    };
    // Non-UTF-8 header values cannot possibly hold a compact JWT.
    let value = raw.to_str().map_err(|_| bad_header())?;
    if value.is_empty() {
        return Err(AuthError::NoAuthorization(format!("Missing {name} Header")));
    }

    let mut parts = value.split_whitespace();
    if scheme.is_empty() {
        match (parts.next(), parts.next()) {
            (Some(token), None) => Ok(token),
            _ => Err(bad_header()),
        }
    } else {
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(token), None) if first == scheme => Ok(token),
            _ => Err(bad_header()),
        }
    }
}
