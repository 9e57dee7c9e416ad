//! fibsvc core: transport-agnostic computation, metrics, and error types.
//!
//! This crate holds the two pieces of the service with real invariants: the
//! bottom-up Fibonacci computer and the per-endpoint latency registry. It
//! carries no HTTP or runtime dependencies so the server and tests can share
//! it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `FibsvcError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod fib;
pub mod metrics;
pub mod payload;

/// Shared result type.
pub use error::{FibsvcError, Result};
