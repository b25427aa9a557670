//! # API Module
//!
//! HTTP handlers of the Obscurify web server and the access-gate middleware.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Stores a random `state` in the session and redirects to
//!   Spotify's consent page.
//! - [`callback`] - Verifies the `state`, exchanges the authorization code,
//!   runs the login orchestrator and starts the authenticated session.
//! - [`refresh_token`] - Exchanges a refresh token for a new access token.
//! - [`logout`] - Destroys the session.
//!
//! ### Pages
//!
//! - [`index`] - Landing page with a login link.
//! - [`stats`] - Obscurity score and summary of the logged-in user. Guarded.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information.
//!
//! ## Middleware
//!
//! [`auth_required`] consults the session on every request for a path listed in
//! [`AuthRequired`] and redirects anonymous visitors to `/`.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::get};
//! use obscurify::api::{AuthRequired, auth_required, stats};
//!
//! let app = Router::new()
//!     .route("/stats", get(stats))
//!     .layer(middleware::from_fn_with_state(AuthRequired::new(["/stats"]), auth_required));
//! ```

mod auth;
mod callback;
mod health;
mod middleware;
mod stats;

pub use auth::{STATE_LENGTH, login, logout, refresh_token};
pub use callback::callback;
pub use health::health;
pub use middleware::{AuthRequired, auth_required};
pub use stats::{index, stats};
