use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{Res, info, server::AppState, session, types::TokenResponse, utils};

/// Length of the OAuth `state` value.
pub const STATE_LENGTH: usize = 16;

#[derive(Debug, Deserialize)]
pub struct RefreshParams {
    pub refresh_token: String,
}

/// Sends the user to Spotify's consent page.
pub async fn login(State(state): State<AppState>, session: Session) -> Res<Redirect> {
    let oauth_state = utils::generate_random_string(STATE_LENGTH);
    session::store_oauth_state(&session, &oauth_state).await?;

    let url = state.spotify.authorize_url(&oauth_state)?;
    Ok(Redirect::to(&url))
}

/// Trades a refresh token for a new access token.
pub async fn refresh_token(
    State(state): State<AppState>,
    Query(params): Query<RefreshParams>,
) -> Res<Json<TokenResponse>> {
    let token = state
        .spotify
        .get_token_with_refresh(&params.refresh_token)
        .await?;
    Ok(Json(token))
}

pub async fn logout(session: Session) -> Res<Redirect> {
    if let Some(user) = session::session_user(&session).await? {
        info!("{} logged out", user.username);
    }
    session::end_authenticated_session(&session).await?;
    Ok(Redirect::to("/"))
}
