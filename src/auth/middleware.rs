use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, error};

use super::claims::AdminContext;
use super::token::VerifyError;

/// Gate for protected routes: reads the session cookie, verifies it, and
/// injects [`AdminContext`] into request extensions. Every rejection reason
/// (missing, malformed, forged, expired) yields the same 401 so the response
/// leaks nothing about why verification failed; the reason is logged instead.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = jar
        .get(&state.config.security.cookie_name)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();

    match state.tokens.verify(&token) {
        Ok(claims) => {
            let context = AdminContext {
                subject: claims.sub.clone(),
                claims,
            };
            request.extensions_mut().insert(context);
            Ok(next.run(request).await)
        }
        Err(VerifyError::SecretMissing) => {
            error!(
                name: "auth.secret.missing",
                "session verification attempted without a signing secret"
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(VerifyError::Rejected(reason)) => {
            debug!(
                name: "auth.session.rejected",
                reason = ?reason,
                path = %request.uri().path(),
                "session token rejected"
            );
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
