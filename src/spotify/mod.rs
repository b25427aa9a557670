//! # Spotify Integration Module
//!
//! This module is the only place that talks to Spotify. It wraps a shared
//! [`reqwest::Client`] together with the application's client credentials and the
//! endpoint URLs from [`crate::config::Config`] in a [`SpotifyClient`].
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers / login orchestrator
//!          ↓
//! SpotifyClient
//!     ├── Authentication (authorization code + refresh token grants)
//!     └── Resources (bearer-authenticated GETs: /me, /me/top/tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts service / Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the confidential-client variant of the OAuth 2.0
//! authorization-code flow. Both grants POST a form-encoded body to the token
//! endpoint with HTTP Basic credentials built from the client id and secret.
//!
//! ## Resources
//!
//! [`tracks`] issues bearer-authenticated GET requests and decodes the JSON body.
//! Status codes are logged but not translated: whatever Spotify answers is
//! decoded into the requested type, and a body of the wrong shape surfaces as a
//! decode error.
//!
//! ## Error Types
//!
//! All functions return [`crate::Res`]; network and decode failures arrive as
//! [`crate::Error::Http`], rejected grants as [`crate::Error::OAuthProvider`].
//! Nothing is retried.

pub mod auth;
mod client;
pub mod tracks;

pub use client::SpotifyClient;
