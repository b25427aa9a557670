use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::{server::AppState, warning};

/// Reports the version and whether the summary store answers.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let (status, summaries) = match state.stores.summaries.summaries().await {
        Ok(summaries) => ("ok", summaries.len()),
        Err(e) => {
            warning!("Health check could not read summaries: {}", e);
            ("degraded", 0)
        }
    };

    Json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "summaries": summaries,
    }))
}
