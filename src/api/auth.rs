//! Authentication HTTP handlers (login, logout, session introspection).

use axum::{Extension, Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::AppState;
use crate::auth::claims::AdminContext;
use crate::auth::cookie::{expired_session_cookie, session_cookie};
use crate::auth::token::IssueError;

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Verified session claim, as returned by `/api/auth/me`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub issued_at: i64,
    pub expires_at: Option<i64>,
}

/// POST /api/auth/login - verify credentials and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), (StatusCode, String)> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "email and password are required".to_string(),
        ));
    }

    // Unknown email and wrong password are indistinguishable to the caller.
    let Some(identity) = state.directory.authenticate(&req.email, &req.password) else {
        info!(name: "auth.login.denied", email = %req.email, "login rejected");
        return Err((StatusCode::UNAUTHORIZED, "invalid credentials".to_string()));
    };

    let token = state
        .tokens
        .issue(&identity.subject, identity.role.as_deref())
        .map_err(|e| match e {
            IssueError::SecretMissing => {
                error!(
                    name: "auth.secret.missing",
                    "cannot issue session token without a signing secret"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server misconfigured".to_string(),
                )
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    info!(name: "auth.login.ok", subject = %identity.subject, "admin logged in");

    let jar = jar.add(session_cookie(
        &state.config.security.cookie_name,
        token,
        state.tokens.ttl_secs(),
        state.config.security.cookie_secure,
    ));

    Ok((
        jar,
        Json(LoginResponse {
            subject: identity.subject,
            role: identity.role,
        }),
    ))
}

/// POST /api/auth/logout - clear the session cookie. The token itself is
/// stateless, so logout is purely a transport concern.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.add(expired_session_cookie(
        &state.config.security.cookie_name,
        state.config.security.cookie_secure,
    ));
    (jar, StatusCode::NO_CONTENT)
}

/// GET /api/auth/me - echo the verified session claim (protected route).
pub async fn me(Extension(admin): Extension<AdminContext>) -> Json<SessionResponse> {
    Json(SessionResponse {
        subject: admin.claims.sub,
        role: admin.claims.role,
        issued_at: admin.claims.iat,
        expires_at: admin.claims.exp,
    })
}
