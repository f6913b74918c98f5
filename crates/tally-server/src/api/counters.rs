use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tally_core::error::{ClientCode, Result};

use crate::api::ApiError;
use crate::app_state::AppState;

pub async fn create_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = state.store().create(&name).map(|c| {
        tracing::info!(name = %c.name, "counter created");
        (StatusCode::CREATED, Json(c))
    });
    finish(&state, "create", started, res)
}

pub async fn increment_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let started = Instant::now();
    let res = state.store().increment(&name).map(|c| {
        tracing::debug!(name = %c.name, value = c.value, "counter incremented");
        (StatusCode::OK, Json(c))
    });
    finish(&state, "increment", started, res)
}

pub async fn get_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = state.store().get(&name).map(|c| (StatusCode::OK, Json(c)));
    finish(&state, "get", started, res)
}

pub async fn delete_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    if state.store().delete(&name) {
        tracing::info!(%name, "counter deleted");
    }
    finish(&state, "delete", started, Ok(StatusCode::NO_CONTENT))
}

/// Turn a store result into a response and record request metrics.
fn finish<T: IntoResponse>(
    state: &AppState,
    op: &'static str,
    started: Instant,
    res: Result<T>,
) -> Response {
    let resp = match res {
        Ok(ok) => ok.into_response(),
        Err(e) => {
            match e.client_code() {
                ClientCode::Internal => tracing::warn!(op, error = %e, "counter op failed"),
                _ => tracing::debug!(op, error = %e, "counter op rejected"),
            }
            ApiError::from(e).into_response()
        }
    };

    let metrics = state.metrics();
    metrics
        .requests
        .inc(&[("op", op), ("status", resp.status().as_str())]);
    metrics.request_duration.observe(&[("op", op)], started.elapsed());
    resp
}
