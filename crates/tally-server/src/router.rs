//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/counters/:name",
            get(api::counters::get_counter)
                .post(api::counters::create_counter)
                .put(api::counters::increment_counter)
                .delete(api::counters::delete_counter),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
