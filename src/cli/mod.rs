//! # CLI Module
//!
//! Implementations of the `obscurify` subcommands. Each command receives the
//! loaded [`crate::config::Config`], does its work and reports through the
//! crate's logging macros. Fatal failures end the process via [`crate::error!`].
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP server
//! - [`refresh`] - Exchanges a refresh token for a new access token
//! - [`users`] - Lists stored users with their score and summary
//! - [`summaries`] - Lists the summary records, seeding missing defaults
//!
//! ## Usage Patterns
//!
//! ```bash
//! obscurify serve                  # Start the backend
//! obscurify users                  # Who logged in and how obscure they are
//! obscurify summaries              # Show the canned summary texts
//! obscurify refresh AQD...         # Get a fresh access token
//! ```

mod refresh;
mod serve;
mod users;

pub use refresh::refresh;
pub use serve::serve;
pub use users::{summaries, users};
