use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::api;
use crate::auth::directory::AdminDirectory;
use crate::auth::middleware::require_session;
use crate::auth::token::SessionTokenService;
use crate::config::AppConfig;

/// Wire application state from configuration.
///
/// A missing or blank signing secret is tolerated at startup (with a loud
/// warning) and turns into a hard error on first token use.
pub fn build_state(config: Arc<AppConfig>) -> AppState {
    let secret = config
        .security
        .session_secret
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let tokens = match secret {
        Some(secret) => SessionTokenService::new(secret, config.security.session_ttl_secs),
        None => {
            warn!(
                name: "auth.secret.missing",
                "no session signing secret configured; login and session \
                 verification will fail until SESSION_SECRET is set"
            );
            SessionTokenService::unconfigured(config.security.session_ttl_secs)
        }
    };

    let directory = AdminDirectory::new(config.directory.admins.clone());
    if directory.is_empty() {
        warn!(
            name: "auth.directory.empty",
            "admin directory is empty; no login can succeed"
        );
    }

    AppState {
        tokens: Arc::new(tokens),
        directory: Arc::new(directory),
        config,
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(api::auth::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(api::auth::login))
        .route("/api/auth/logout", post(api::auth::logout))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = build_state(Arc::clone(&config));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(name: "server.started", address = %addr, "Server started");

    axum::serve(listener, app).await?;
    Ok(())
}

/// GET /health - liveness probe, unauthenticated.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
