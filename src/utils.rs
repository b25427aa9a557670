use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

use crate::types::{Obscurity, Track};

/// Generates a random string of `length` characters drawn from `[A-Za-z0-9]`.
pub fn generate_random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Value of an `Authorization` header for HTTP Basic auth.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Mean of `popularity / 100` over `tracks`, rounded to two decimals.
///
/// Returns `None` when there are no tracks to score.
pub fn obscurity_stat(tracks: &[Track]) -> Option<Obscurity> {
    if tracks.is_empty() {
        return None;
    }

    let sum: f64 = tracks.iter().map(|t| f64::from(t.popularity) / 100.0).sum();
    Some(Obscurity::new(sum / tracks.len() as f64))
}
