//! Configuration management for the Obscurify backend.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. All values are collected once into a [`Config`]
//! that is handed to the server and the CLI explicitly, so no component reads the
//! environment on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, str::FromStr};

use crate::{Error, Res};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_SCOPE: &str = "user-read-private user-top-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_REQUIRED_PATHS: &str = "/stats";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is read first, then the one located in the
/// platform-specific local data directory under `obscurify/.env`. Variables that
/// are already set are never overwritten, so the real environment always wins.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/obscurify/.env`
/// - macOS: `~/Library/Application Support/obscurify/.env`
/// - Windows: `%LOCALAPPDATA%/obscurify/.env`
///
/// # Errors
///
/// Returns [`Error::Io`] if the data directory cannot be created and
/// [`Error::Config`] if an existing `.env` file cannot be parsed. A missing file
/// is not an error.
pub async fn load_env() -> Res<()> {
    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(Error::Config(e.to_string()));
        }
    }

    let path = default_data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    Ok(())
}

/// Returns the default directory for the JSON document store and `.env` file.
pub fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("obscurify");
    path
}

/// Which store backend holds users and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON documents under [`Config::data_dir`].
    File,
    /// Process memory; everything is lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(Error::Config(format!(
                "OBSCURIFY_STORE must be 'file' or 'memory', got '{}'",
                other
            ))),
        }
    }
}

/// Runtime configuration of the backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8888`.
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL registered with the Spotify application.
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Paths guarded by the access gate.
    pub auth_required_paths: Vec<String>,
    pub store: StoreBackend,
    pub data_dir: PathBuf,
}

impl Config {
    /// Creates a configuration with Spotify's public endpoints and defaults
    /// for everything except the client credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            auth_required_paths: parse_paths(DEFAULT_AUTH_REQUIRED_PATHS),
            store: StoreBackend::File,
            data_dir: default_data_dir(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Required Variables
    ///
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// - `SPOTIFY_API_REDIRECT_URI`
    ///
    /// # Optional Variables
    ///
    /// - `SERVER_ADDRESS` (default `127.0.0.1:8888`)
    /// - `SPOTIFY_API_AUTH_SCOPE` (default `user-read-private user-top-read`)
    /// - `SPOTIFY_API_AUTH_URL`, `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL`
    /// - `AUTH_REQUIRED_PATHS`, comma separated (default `/stats`)
    /// - `OBSCURIFY_STORE`, `file` or `memory` (default `file`)
    /// - `OBSCURIFY_DATA_DIR` (default: local data directory)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first missing required variable or
    /// an unknown store backend.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name to
    /// its value. [`Config::from_env`] passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Res<Self> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| Error::Config(format!("{} must be set", name)))
        };
        let optional = |name: &str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        let mut config = Config::new(
            required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            required("SPOTIFY_API_REDIRECT_URI")?,
        );

        config.server_addr = optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        config.scope = optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE);
        config.auth_url = optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL);
        config.token_url = optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL);
        config.api_url = optional("SPOTIFY_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        config.auth_required_paths = parse_paths(&optional(
            "AUTH_REQUIRED_PATHS",
            DEFAULT_AUTH_REQUIRED_PATHS,
        ));
        config.store = optional("OBSCURIFY_STORE", "file").parse()?;
        if let Some(dir) = lookup("OBSCURIFY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

/// Splits a comma separated list of paths, dropping empty entries.
pub fn parse_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
