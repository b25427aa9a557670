use axum::{Router, middleware, routing::get};
use std::{net::SocketAddr, str::FromStr};
use tower_sessions::{
    Expiry, MemoryStore as SessionMemoryStore, SessionManagerLayer,
    cookie::{SameSite, time::Duration},
};

use crate::{
    Error, Res,
    api::{self, AuthRequired},
    config::Config,
    info,
    management::{self, Stores},
    spotify::SpotifyClient,
};

/// How long a session survives without a request.
pub const SESSION_INACTIVITY: Duration = Duration::hours(1);

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
    pub stores: Stores,
}

impl AppState {
    pub fn new(config: &Config, stores: Stores) -> Self {
        Self {
            spotify: SpotifyClient::new(config),
            stores,
        }
    }
}

/// Assembles the application router.
///
/// The session layer wraps the access gate, which wraps the routes. Session
/// cookies use `SameSite=Lax` so they survive the top-level redirect back from
/// Spotify; `secure_cookies` should be set when served over HTTPS.
///
/// Sessions live in process memory and expire after [`SESSION_INACTIVITY`]
/// without a request. Expired records are ignored but never purged, so
/// abandoned logins still accumulate until restart: suitable for a single
/// process, not for long-running multi-user deployments.
pub fn router(state: AppState, gate: AuthRequired, secure_cookies: bool) -> Router {
    let session_layer = SessionManagerLayer::new(SessionMemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(SESSION_INACTIVITY));

    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/refresh_token", get(api::refresh_token))
        .route("/logout", get(api::logout))
        .route("/stats", get(api::stats))
        .layer(middleware::from_fn_with_state(gate, api::auth_required))
        .layer(session_layer)
        .with_state(state)
}

/// Opens the configured store, seeds missing summaries and serves until the
/// process is stopped.
pub async fn start_api_server(config: Config) -> Res<()> {
    let stores = Stores::open(&config);
    let seeded = management::seed_summaries(stores.summaries.as_ref()).await?;
    if seeded > 0 {
        info!("Seeded {} summaries", seeded);
    }

    let state = AppState::new(&config, stores);
    let gate = AuthRequired::new(config.auth_required_paths.clone());
    let app = router(state, gate, config.redirect_uri.starts_with("https://"));

    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| Error::Config(format!("Failed to parse server address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
