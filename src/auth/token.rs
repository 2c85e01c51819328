//! Session token issuance and verification.
//!
//! Tokens are compact HS256 JWTs: a claim set signed with a process-wide
//! secret, handed to the browser as a cookie and re-verified on every request.
//! The service is stateless; validity is recomputed from the token's own
//! signed content, so any number of issue/verify calls may run concurrently.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use super::claims::SessionClaims;

/// Fixed session lifetime: 7 days.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("session signing secret is not configured")]
    SecretMissing,
    #[error("subject must not be empty")]
    EmptySubject,
    #[error("failed to encode session token: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Why a token was rejected. Logged internally, never exposed to callers:
/// the HTTP boundary collapses all of these into a uniform 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Missing,
    Malformed,
    SignatureMismatch,
    Expired,
}

#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration error, distinct from a bad token so operators can tell
    /// misconfiguration apart from expired sessions.
    #[error("session signing secret is not configured")]
    SecretMissing,
    #[error("session token rejected: {0:?}")]
    Rejected(RejectReason),
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies signed session tokens.
///
/// The secret is injected at construction; there is no global key state. A
/// service built without a secret (`unconfigured`) fails loudly on first use
/// rather than degrading to always-valid or always-invalid.
pub struct SessionTokenService {
    keys: Option<SigningKeys>,
    ttl_secs: i64,
    validation: Validation,
}

impl SessionTokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            keys: Some(SigningKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl_secs,
            validation: Self::validation(),
        }
    }

    /// A service with no signing secret. Every issue/verify call returns
    /// `SecretMissing`.
    pub fn unconfigured(ttl_secs: i64) -> Self {
        Self {
            keys: None,
            ttl_secs,
            validation: Self::validation(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Expiry is checked by hand in [`verify_at`](Self::verify_at) against an
    /// injectable clock, so the library's wall-clock exp validation is off.
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }

    /// Issue a token for `subject`, stamping `iat = now` and
    /// `exp = iat + ttl`.
    pub fn issue(&self, subject: &str, role: Option<&str>) -> Result<String, IssueError> {
        self.issue_at(subject, role, Utc::now().timestamp())
    }

    /// Issuance with an explicit clock.
    pub fn issue_at(
        &self,
        subject: &str,
        role: Option<&str>,
        now: i64,
    ) -> Result<String, IssueError> {
        let keys = self.keys.as_ref().ok_or(IssueError::SecretMissing)?;
        if subject.trim().is_empty() {
            return Err(IssueError::EmptySubject);
        }

        let claims = SessionClaims {
            sub: subject.to_owned(),
            role: role.map(str::to_owned),
            iat: now,
            exp: Some(now + self.ttl_secs),
        };
        Ok(encode(&Header::default(), &claims, &keys.encoding)?)
    }

    /// Verify a token against the current wall clock.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, VerifyError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verification with an explicit clock. Signature comparison is
    /// constant-time inside the HS256 verifier; `exp` strictly before `now`
    /// is rejected, a token expiring exactly at `now` is still valid.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<SessionClaims, VerifyError> {
        let keys = self.keys.as_ref().ok_or(VerifyError::SecretMissing)?;

        if token.trim().is_empty() {
            return Err(VerifyError::Rejected(RejectReason::Missing));
        }

        let data = decode::<SessionClaims>(token, &keys.decoding, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidSignature => {
                    VerifyError::Rejected(RejectReason::SignatureMismatch)
                }
                _ => VerifyError::Rejected(RejectReason::Malformed),
            },
        )?;

        let claims = data.claims;
        if let Some(exp) = claims.exp
            && exp < now
        {
            return Err(VerifyError::Rejected(RejectReason::Expired));
        }

        Ok(claims)
    }
}
