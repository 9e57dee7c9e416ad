//! Axum router wiring.

use axum::{routing::get, Router};

use fibsvc_core::metrics::Endpoint;

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(Endpoint::Health.path(), get(ops::health))
        .route(Endpoint::Ready.path(), get(ops::ready))
        .route(Endpoint::Payload.path(), get(ops::payload))
        .route(Endpoint::Metrics.path(), get(ops::metrics))
        .with_state(state)
}
