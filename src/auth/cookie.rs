//! Session cookie construction.
//!
//! The token service returns an opaque string; this is the transport side:
//! httpOnly, SameSite=Lax, path=/, Secure in production, max-age matching the
//! token TTL.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub fn session_cookie(name: &str, token: String, ttl_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_owned(), token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

/// An empty, immediately-expiring cookie with the same attributes, used by
/// logout to make the browser drop the session.
pub fn expired_session_cookie(name: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
