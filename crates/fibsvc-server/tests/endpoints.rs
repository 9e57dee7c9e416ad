#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::{IpAddr, Ipv4Addr};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use fibsvc_core::fib;
use fibsvc_core::metrics::Endpoint;
use fibsvc_core::payload::PayloadResult;
use fibsvc_server::{app_state::AppState, config::ServiceConfig, router::build_router};

const MAX_RANDOM_NUMBER: i64 = 30;

fn test_state() -> AppState {
    AppState::new(ServiceConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 8080,
        max_random_number: MAX_RANDOM_NUMBER,
        metric_decimal_places: Some(3),
    })
}

async fn get(app: &Router, path: &str) -> (StatusCode, String, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_returns_static_message() {
    let state = test_state();
    let app = build_router(state.clone());

    let (status, ct, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct, "application/json; charset=utf-8");
    assert_eq!(body, serde_json::json!("Service is healthy"));
    assert_eq!(state.registry().get(Endpoint::Health).request_count, 1);
}

#[tokio::test]
async fn ready_returns_static_message() {
    let state = test_state();
    let app = build_router(state.clone());

    let (status, ct, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct, "application/json; charset=utf-8");
    assert_eq!(body, serde_json::json!("Service is ready"));
    assert_eq!(state.registry().get(Endpoint::Ready).request_count, 1);
}

#[tokio::test]
async fn payload_matches_fibonacci_of_its_random_number() {
    let state = test_state();
    let app = build_router(state.clone());

    for _ in 0..20 {
        let (status, ct, body) = get(&app, "/payload").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ct, "application/json; charset=utf-8");

        let p: PayloadResult = serde_json::from_value(body).unwrap();
        assert!((0..MAX_RANDOM_NUMBER).contains(&p.random_number));
        assert_eq!(p.fibonacci_sequence, fib::sequence(p.random_number).unwrap());
    }
    assert_eq!(state.registry().get(Endpoint::Payload).request_count, 20);
}

#[tokio::test]
async fn metrics_lists_every_endpoint() {
    let app = build_router(test_state());

    get(&app, "/health").await;
    get(&app, "/health").await;
    get(&app, "/payload").await;

    let (status, ct, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct, "application/json; charset=utf-8");

    for e in Endpoint::ALL {
        let entry = &body[e.as_str()];
        assert!(entry["RequestCount"].as_u64().is_some(), "endpoint={e}");
        assert!(entry["TotalDuration"].as_f64().unwrap() >= 0.0, "endpoint={e}");
        assert!(entry["AverageLatency"].as_f64().unwrap() >= 0.0, "endpoint={e}");
    }
    assert_eq!(body["health"]["RequestCount"], 2);
    assert_eq!(body["payload"]["RequestCount"], 1);
    assert_eq!(body["ready"]["RequestCount"], 0);
}

#[tokio::test]
async fn metrics_counts_its_own_earlier_requests() {
    let state = test_state();
    let app = build_router(state.clone());

    let (_, _, first) = get(&app, "/metrics").await;
    assert_eq!(first["metrics"]["RequestCount"], 0);

    let (_, _, second) = get(&app, "/metrics").await;
    assert_eq!(second["metrics"]["RequestCount"], 1);

    assert_eq!(state.registry().get(Endpoint::Metrics).request_count, 2);
}

#[tokio::test]
async fn unknown_path_is_not_recorded() {
    let state = test_state();
    let app = build_router(state.clone());

    let resp = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    for (_, rec) in state.registry().snapshot() {
        assert_eq!(rec.request_count, 0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_are_all_counted() {
    const N: usize = 200;

    let state = test_state();
    let app = build_router(state.clone());

    let tasks: Vec<_> = (0..N)
        .map(|i| {
            let app = app.clone();
            let path = if i % 2 == 0 { "/health" } else { "/payload" };
            tokio::spawn(async move {
                app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();

    for status in futures_util::future::join_all(tasks).await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    let snap = state.registry().snapshot();
    assert_eq!(snap["health"].request_count, (N / 2) as u64);
    assert_eq!(snap["payload"].request_count, (N / 2) as u64);
}

#[tokio::test]
async fn failed_payloads_are_still_recorded_once_each() {
    const N: u64 = 50;

    // Bypasses validation so draws land past the u64 range of F(n).
    let state = AppState::new(ServiceConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 8080,
        max_random_number: 100_000,
        metric_decimal_places: None,
    });
    let app = build_router(state.clone());

    let mut failures = 0;
    for _ in 0..N {
        let (status, ct, body) = get(&app, "/payload").await;
        assert_eq!(ct, "application/json; charset=utf-8");
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            assert_eq!(body["error"], "OVERFLOW");
            assert!(body["message"].as_str().unwrap().contains("overflow"));
            failures += 1;
        } else {
            assert_eq!(status, StatusCode::OK);
        }
    }

    // P(n <= 93) per draw is under 0.1%, so nearly every request fails.
    assert!(failures >= N - 2, "failures={failures}");
    assert_eq!(state.registry().get(Endpoint::Payload).request_count, N);
    assert_eq!(state.registry().get(Endpoint::Metrics).request_count, 0);
}
