//! Service HTTP endpoints.
//!
//! - `/health`  : liveness
//! - `/ready`   : readiness
//! - `/payload` : random index + Fibonacci sequence
//! - `/metrics` : per-endpoint request count and latency (JSON)
//!
//! Every handler opens an `EndpointTimer` first; it is dropped after the
//! response is built, so each request is recorded exactly once.

use axum::{extract::State, response::Response};

use fibsvc_core::metrics::Endpoint;
use fibsvc_core::payload::PayloadResult;

use crate::app_state::AppState;
use crate::obs::EndpointTimer;
use crate::respond::json_response;

pub const HEALTHY: &str = "Service is healthy";
pub const READY: &str = "Service is ready";

pub async fn health(State(state): State<AppState>) -> Response {
    let _timer = EndpointTimer::start(state.registry(), Endpoint::Health);
    json_response(Ok(HEALTHY))
}

pub async fn ready(State(state): State<AppState>) -> Response {
    let _timer = EndpointTimer::start(state.registry(), Endpoint::Ready);
    json_response(Ok(READY))
}

pub async fn payload(State(state): State<AppState>) -> Response {
    let _timer = EndpointTimer::start(state.registry(), Endpoint::Payload);
    let result = PayloadResult::generate(&mut rand::thread_rng(), state.cfg().max_random_number);
    json_response(result)
}

/// The snapshot is taken before this request's own update, so the
/// `metrics` entry reflects earlier `/metrics` calls only.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    let _timer = EndpointTimer::start(registry.clone(), Endpoint::Metrics);
    json_response(Ok(registry.snapshot()))
}
