//! Authenticated session lifecycle.
//!
//! Sessions are provided by `tower-sessions`; this module only decides what is
//! stored in them and under which keys.
//!
//! - [`SESSION_USER_KEY`] holds the [`SessionUser`] of a logged-in user. Its
//!   presence is what the access gate checks.
//! - [`SESSION_OAUTH_STATE_KEY`] holds the `state` value between `/login` and
//!   `/callback`.

use tower_sessions::Session;

use crate::{
    Res,
    types::{SessionUser, User},
};

pub const SESSION_USER_KEY: &str = "auth:user";
pub const SESSION_OAUTH_STATE_KEY: &str = "auth:oauth_state";

/// Binds `user` to the session.
///
/// The session id is regenerated first, so an id handed out before login can
/// not be reused to ride on the authenticated session.
pub async fn start_authenticated_session(session: &Session, user: &User) -> Res<()> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_KEY, SessionUser::from(user))
        .await?;
    Ok(())
}

/// Destroys the session, logging the user out.
pub async fn end_authenticated_session(session: &Session) -> Res<()> {
    session.flush().await?;
    Ok(())
}

/// The user bound to the session, if any.
pub async fn session_user(session: &Session) -> Res<Option<SessionUser>> {
    Ok(session.get(SESSION_USER_KEY).await?)
}

pub async fn store_oauth_state(session: &Session, state: &str) -> Res<()> {
    session.insert(SESSION_OAUTH_STATE_KEY, state).await?;
    Ok(())
}

/// Removes and returns the pending OAuth state. Each state is accepted once.
pub async fn take_oauth_state(session: &Session) -> Res<Option<String>> {
    Ok(session.remove(SESSION_OAUTH_STATE_KEY).await?)
}
