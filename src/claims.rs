use chrono::Utc;
use serde_json::Value;

use crate::config::JwtConfig;

/// The payload of a token: claim name to JSON value. Order is irrelevant.
pub type ClaimSet = serde_json::Map<String, Value>;

/// Build the default claim set for an identity:
/// `{exp: now + expires, iat: now, nbf: now, <identity_claim>: identity}`.
///
/// Reads the wall clock exactly once. Registering a custom builder via
/// [`JwtManager::jwt_data_loader`](crate::JwtManager::jwt_data_loader)
/// replaces this wholesale; nothing merges these defaults back in, so a
/// custom builder that wants expiry enforcement must emit `exp` itself.
pub fn default_claims(config: &JwtConfig, identity: Value) -> ClaimSet {
    let now = Utc::now();
    let exp = now + config.expires;

    let mut claims = ClaimSet::new();
    claims.insert("exp".to_string(), Value::from(exp.timestamp()));
    claims.insert("iat".to_string(), Value::from(now.timestamp()));
    claims.insert("nbf".to_string(), Value::from(now.timestamp()));
    claims.insert(config.identity_claim.clone(), identity);
    claims
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn default_claims_contain_reserved_claims_and_identity() {
        let config = JwtConfig::default();
        let claims = default_claims(&config, json!("username"));

        assert!(claims.contains_key("exp"));
        assert!(claims.contains_key("iat"));
        assert!(claims.contains_key("nbf"));
        assert_eq!(claims["sub"], json!("username"));

        let iat = claims["iat"].as_i64().unwrap();
        let nbf = claims["nbf"].as_i64().unwrap();
        let exp = claims["exp"].as_i64().unwrap();
        assert_eq!(iat, nbf);
        assert_eq!(exp - iat, 3600);
    }

    #[test]
    fn identity_claim_name_is_configurable() {
        let config = JwtConfig {
            identity_claim: "identity".to_string(),
            ..Default::default()
        };
        let claims = default_claims(&config, json!(42));
        assert_eq!(claims["identity"], json!(42));
        assert!(!claims.contains_key("sub"));
    }

    #[test]
    fn negative_lifetime_produces_past_expiry() {
        let config = JwtConfig {
            expires: Duration::hours(-1),
            ..Default::default()
        };
        let claims = default_claims(&config, json!("username"));
        let exp = claims["exp"].as_i64().unwrap();
        let iat = claims["iat"].as_i64().unwrap();
        assert!(exp < iat);
    }
}
