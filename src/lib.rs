//! Obscurify Backend Library
//!
//! This library implements the backend of a small web application: users sign in
//! with Spotify, their top tracks are reduced to an "obscurity" score, the score is
//! mapped to one of four canned summaries, and the result is stored on a user
//! record bound to a server-side session.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and the access-gate middleware
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Crate error type and HTTP error responses
//! - `management` - Stores, summary selection and the login orchestrator
//! - `server` - Router assembly and the HTTP server loop
//! - `session` - Authenticated session lifecycle
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Random tokens and the obscurity scorer
//!
//! # Example
//!
//! ```
//! use obscurify::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> obscurify::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports an [`Error`], which keeps
/// `?` usable across the HTTP, store and session layers.
///
/// # Example
///
/// ```
/// use obscurify::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("User {} logged in", username);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal failures in the CLI entry point, such as a missing
/// client secret at startup. Request handlers never call it.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures that are logged and swallowed, for example a
/// failed summary lookup during login.
///
/// # Example
///
/// ```
/// warning!("Summary lookup for {} failed: {}", name, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
