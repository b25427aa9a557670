#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use obscurify::{config::Config, config::StoreBackend, types::Track};
use serde_json::{Value, json};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const ACCESS_TOKEN: &str = "access-123";
pub const REFRESH_TOKEN: &str = "refresh-456";
/// Authorization code the fake token endpoint rejects.
pub const BAD_CODE: &str = "expired-code";

/// A request received by the fake token endpoint.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    pub authorization: Option<String>,
    pub form: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct FakeState {
    popularities: Arc<Mutex<Vec<u32>>>,
    display_name: Arc<Mutex<Option<String>>>,
    token_requests: Arc<Mutex<Vec<TokenRequest>>>,
    bearer_tokens: Arc<Mutex<Vec<String>>>,
}

/// In-process stand-in for the Spotify Accounts service and Web API.
pub struct FakeSpotify {
    pub addr: SocketAddr,
    state: FakeState,
}

impl FakeSpotify {
    pub async fn start() -> Self {
        let state = FakeState::default();
        *state.display_name.lock().unwrap() = Some("Ada".to_string());

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me", get(me))
            .route("/v1/me/top/tracks", get(top_tracks))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Configuration pointing every Spotify URL at this server.
    pub fn config(&self) -> Config {
        let mut config = Config::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI);
        config.auth_url = format!("http://{}/authorize", self.addr);
        config.token_url = format!("http://{}/api/token", self.addr);
        config.api_url = format!("http://{}/v1", self.addr);
        config.store = StoreBackend::Memory;
        config
    }

    pub fn set_popularities(&self, popularities: &[u32]) {
        *self.state.popularities.lock().unwrap() = popularities.to_vec();
    }

    pub fn set_display_name(&self, name: Option<&str>) {
        *self.state.display_name.lock().unwrap() = name.map(String::from);
    }

    pub fn token_requests(&self) -> Vec<TokenRequest> {
        self.state.token_requests.lock().unwrap().clone()
    }

    pub fn bearer_tokens(&self) -> Vec<String> {
        self.state.bearer_tokens.lock().unwrap().clone()
    }
}

async fn token(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.token_requests.lock().unwrap().push(TokenRequest {
        authorization,
        form: form.clone(),
    });

    if form.get("code").map(String::as_str) == Some(BAD_CODE) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid authorization code"
            })),
        );
    }

    let mut body = json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "scope": "user-read-private user-top-read",
        "expires_in": 3600,
    });
    if form.get("grant_type").map(String::as_str) == Some("authorization_code") {
        body["refresh_token"] = json!(REFRESH_TOKEN);
    }
    (StatusCode::OK, Json(body))
}

fn record_bearer(state: &FakeState, headers: &HeaderMap) {
    if let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        state.bearer_tokens.lock().unwrap().push(token.to_string());
    }
}

async fn me(State(state): State<FakeState>, headers: HeaderMap) -> Json<Value> {
    record_bearer(&state, &headers);
    let display_name = state.display_name.lock().unwrap().clone();
    Json(json!({ "id": "spotify-user-1", "display_name": display_name }))
}

async fn top_tracks(State(state): State<FakeState>, headers: HeaderMap) -> Json<Value> {
    record_bearer(&state, &headers);
    let items: Vec<Value> = state
        .popularities
        .lock()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, p)| json!({ "id": format!("track-{}", i), "name": format!("Track {}", i), "popularity": p }))
        .collect();
    Json(json!({ "items": items }))
}

pub fn tracks(popularities: &[u32]) -> Vec<Track> {
    popularities
        .iter()
        .enumerate()
        .map(|(i, p)| Track {
            id: format!("track-{}", i),
            name: format!("Track {}", i),
            popularity: *p,
        })
        .collect()
}
