use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use file_relay_api::envelope::ResponseEnvelope;

use crate::reader;

/// Immutable per-process state: the sample file served by `GET /`,
/// resolved to an absolute path once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sample_file: Arc<PathBuf>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_sample))
        .with_state(state)
}

async fn serve_sample(State(state): State<AppState>) -> (StatusCode, Json<ResponseEnvelope>) {
    let id = fastrand::u64(..);
    log::info!(id; "received request");
    log::debug!(id, path:debug = *state.sample_file; "reading sample file");

    match reader::read_file(&state.sample_file).await {
        Ok(output) => {
            log::debug!(id, bytes = output.len(); "read completed");
            (StatusCode::OK, Json(ResponseEnvelope::success(output)))
        }
        Err(e) => {
            // Every failure kind collapses into the same envelope; the
            // cause only survives as diagnostic text in `details`.
            log::error!(id; "read failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ResponseEnvelope::error(
                    "script execution failed",
                    Some(e.to_string()),
                )),
            )
        }
    }
}
