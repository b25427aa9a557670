use chrono::Utc;

use crate::{
    Res, info,
    spotify::SpotifyClient,
    success,
    types::{SpotifyProfile, User},
    utils,
};

use super::{Stores, pick_summary};

/// Finds or creates the user behind `profile` and refreshes their stats.
///
/// Runs on every successful Spotify login:
///
/// 1. Look up the user by [`SpotifyProfile::username`].
/// 2. Fetch the top tracks with `auth_token` and compute the obscurity score.
/// 3. Store the new token. If there was anything to score, also store the
///    score and the matching summary; otherwise the previous stats stay.
/// 4. Save the record, creating it on first login.
///
/// # Errors
///
/// Failing user lookups, Spotify requests and saves are returned. A failing
/// summary lookup is not: the user is saved without a summary.
pub async fn login(
    stores: &Stores,
    spotify: &SpotifyClient,
    profile: &SpotifyProfile,
    auth_token: &str,
) -> Res<User> {
    let username = profile.username();

    let mut user = match stores.users.find_user(username).await? {
        Some(user) => {
            info!("User {} has logged in before", username);
            user
        }
        None => {
            info!("Creating user {}", username);
            User::new(username, auth_token)
        }
    };

    let top_tracks = spotify.top_tracks(auth_token).await?;

    user.auth_token = auth_token.to_string();
    match utils::obscurity_stat(&top_tracks) {
        Some(obscurity) => {
            let summary = pick_summary(stores.summaries.as_ref(), obscurity.value()).await;
            user.stats.obscurity = Some(obscurity.value());
            user.summary = summary.map(|s| s.id);
        }
        None => info!("No top tracks for {}, keeping previous stats", username),
    }
    user.updated_at = Utc::now();

    let user = stores.users.save_user(user).await?;
    success!("Saved user {}", user.username);
    Ok(user)
}
