use serde_json::Value;

use crate::claims::ClaimSet;

/// Request-scoped view of the decoded token.
///
/// The gate middleware inserts one into the request extensions after a
/// successful decode; the request owns it exclusively and it is dropped
/// with the request. Handlers behind the optional gate may instead see the
/// empty context, whose every lookup returns nothing.
#[derive(Debug, Clone)]
pub struct JwtCtx {
    claims: ClaimSet,
    identity_claim: String,
}

impl JwtCtx {
    pub fn new(claims: ClaimSet, identity_claim: impl Into<String>) -> Self {
        Self {
            claims,
            identity_claim: identity_claim.into(),
        }
    }

    /// Context for a request that carried no (usable) credentials.
    pub fn empty(identity_claim: impl Into<String>) -> Self {
        Self::new(ClaimSet::new(), identity_claim)
    }

    /// All claims of the decoded token, or an empty set if none was present.
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// The identity claim value, `None` when no token was decoded (or the
    /// token simply lacks the claim).
    pub fn identity(&self) -> Option<&Value> {
        self.claims.get(&self.identity_claim)
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn into_claims(self) -> ClaimSet {
        self.claims
    }
}

impl Default for JwtCtx {
    fn default() -> Self {
        Self::empty("sub")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_follows_the_configured_claim_name() {
        let mut claims = ClaimSet::new();
        claims.insert("identity".to_string(), json!("username"));
        let ctx = JwtCtx::new(claims, "identity");
        assert_eq!(ctx.identity(), Some(&json!("username")));
        assert!(ctx.get("sub").is_none());
    }

    #[test]
    fn empty_context_yields_nothing() {
        let ctx = JwtCtx::default();
        assert!(ctx.is_empty());
        assert!(ctx.identity().is_none());
        assert!(ctx.claims().is_empty());
    }
}
