//! JSON response writer shared by every handler.
//!
//! Serialization happens here, eagerly, so it runs inside the handler's
//! `EndpointTimer` scope and counts toward the endpoint's latency.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use fibsvc_core::error::{FibsvcError, Result};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

/// `Ok` -> 200 with the serialized value; `Err` or a failed encode -> 500
/// with an `{"error", "message"}` body. Failures are logged.
pub fn json_response<T: Serialize>(result: Result<T>) -> Response {
    let encoded = result.and_then(|v| serde_json::to_vec(&v).map_err(FibsvcError::from));
    match encoded {
        Ok(body) => with_json_type(StatusCode::OK, body),
        Err(e) => error_response(&e),
    }
}

fn error_response(e: &FibsvcError) -> Response {
    tracing::error!(code = e.client_code().as_str(), error = %e, "request failed");

    let body = ErrorBody {
        error: e.client_code().as_str(),
        message: e.to_string(),
    };
    match serde_json::to_vec(&body) {
        Ok(bytes) => with_json_type(StatusCode::INTERNAL_SERVER_ERROR, bytes),
        Err(encode_err) => {
            tracing::error!(error = %encode_err, "error body encode failed");
            with_json_type(StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
        }
    }
}

fn with_json_type(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response()
}
