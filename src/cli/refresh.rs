use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, spotify::SpotifyClient, success};

/// Exchanges `refresh_token` for a new access token and prints it.
pub async fn refresh(config: Config, refresh_token: String) {
    let client = SpotifyClient::new(&config);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Refreshing access token...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = client.get_token_with_refresh(&refresh_token).await;
    pb.finish_and_clear();

    match result {
        Ok(token) => {
            success!("New access token, valid for {}s", token.expires_in);
            println!("{}", token.access_token);
            if let Some(rotated) = token.refresh_token {
                success!("Spotify rotated the refresh token");
                println!("{}", rotated);
            }
        }
        Err(e) => error!("Failed to refresh token. Err: {}", e),
    }
}
