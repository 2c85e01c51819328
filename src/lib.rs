//! Fluentgate
//!
//! Admin authentication service for the speaking-assessment platform. Issues
//! and verifies the signed, time-limited session credential that gates the
//! review dashboard, and exposes the small HTTP surface that transports it
//! as a cookie.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server (login, logout, session introspection)
//! - **Tokens**: stateless HS256 session tokens with a fixed 7-day TTL
//! - **Directory**: config-backed admin accounts with Argon2 password hashes
//!
//! # Modules
//!
//! - [`auth`]: token service, claims, cookie transport, request gate
//! - [`api`]: HTTP handlers
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`server`]: state wiring and router construction

pub mod api;
pub mod auth;
pub mod config;
pub mod server;

use std::sync::Arc;

use crate::auth::directory::AdminDirectory;
use crate::auth::token::SessionTokenService;
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session token issuance and verification.
    pub tokens: Arc<SessionTokenService>,
    /// Admin credential directory.
    pub directory: Arc<AdminDirectory>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
