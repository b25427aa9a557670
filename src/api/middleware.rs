use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::session;

/// The set of paths that require a logged-in user.
#[derive(Debug, Clone, Default)]
pub struct AuthRequired {
    paths: Arc<HashSet<String>>,
}

impl AuthRequired {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: Arc::new(paths.into_iter().map(Into::into).collect()),
        }
    }

    /// Exact match on the request path; `/stats/` and `/stats` differ.
    pub fn is_guarded(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Access gate: requests for a guarded path without a session user are
/// redirected to `/`, everything else passes through.
///
/// Must run inside the `tower-sessions` layer.
pub async fn auth_required(
    State(gate): State<AuthRequired>,
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    if gate.is_guarded(req.uri().path()) {
        match session::session_user(&session).await {
            Ok(Some(_)) => {}
            Ok(None) => return Redirect::to("/").into_response(),
            Err(e) => return e.into_response(),
        }
    }

    next.run(req).await
}
