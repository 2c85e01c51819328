use serde::{Deserialize, Serialize};

/// Claims embedded in a signed session token.
///
/// `role` is opaque metadata carried for the caller's benefit; nothing in the
/// verification path branches on it. `exp` is always stamped at issuance but
/// tolerated as absent at verification.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Administrator identity (email).
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch (`iat` + TTL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Verified admin identity injected into request extensions by the
/// session middleware.
#[derive(Clone, Debug)]
pub struct AdminContext {
    pub subject: String,
    pub claims: SessionClaims,
}
