use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{Error, Res, management, server::AppState, session, success, warning};

/// Query parameters Spotify appends to the redirect URI.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Completes the authorization-code flow.
///
/// Verifies the `state` against the one stored by `/login`, exchanges the code,
/// identifies the user, refreshes their stats and binds them to the session.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Res<Redirect> {
    let expected = session::take_oauth_state(&session).await?;
    if params.state.is_none() || params.state != expected {
        warning!("Rejected callback with unexpected state");
        return Err(Error::OAuthStateMismatch);
    }

    if let Some(error) = params.error {
        return Err(Error::OAuthProvider(error));
    }
    let code = params
        .code
        .ok_or_else(|| Error::OAuthProvider("missing authorization code".to_string()))?;

    let token = state.spotify.get_token(&code).await?;
    let profile = state.spotify.current_profile(&token.access_token).await?;
    let user =
        management::login(&state.stores, &state.spotify, &profile, &token.access_token).await?;

    session::start_authenticated_session(&session, &user).await?;
    success!("{} logged in", user.username);

    Ok(Redirect::to("/stats"))
}
