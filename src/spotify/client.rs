use reqwest::Client;

use crate::config::Config;

/// Spotify API client bound to one registered application.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) redirect_uri: String,
    pub(crate) scope: String,
    pub(crate) auth_url: String,
    pub(crate) token_url: String,
    pub(crate) api_url: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of a Web API endpoint, e.g. `api_endpoint("/me")`.
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
