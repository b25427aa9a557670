use axum::{Json, extract::State, response::Html};
use tower_sessions::Session;

use crate::{Error, Res, server::AppState, session, types::UserStats};

/// Obscurity score and summary of the logged-in user.
pub async fn stats(State(state): State<AppState>, session: Session) -> Res<Json<UserStats>> {
    let session_user = session::session_user(&session)
        .await?
        .ok_or(Error::NotAuthenticated)?;

    let user = state
        .stores
        .users
        .find_user(&session_user.username)
        .await?
        .ok_or_else(|| Error::UserNotFound(session_user.username.clone()))?;

    let summary = match user.summary {
        Some(id) => state.stores.summaries.find_summary_by_id(id).await?,
        None => None,
    };

    Ok(Json(UserStats {
        username: user.username,
        obscurity: user.stats.obscurity,
        summary,
    }))
}

pub async fn index(session: Session) -> Res<Html<String>> {
    let body = match session::session_user(&session).await? {
        Some(user) => format!(
            "<h2>Hi {}.</h2><p><a href=\"/stats\">Your stats</a> | <a href=\"/logout\">Log out</a></p>",
            escape(&user.username)
        ),
        None => "<h2>How obscure is your taste?</h2><p><a href=\"/login\">Log in with Spotify</a></p>"
            .to_string(),
    };
    Ok(Html(body))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
