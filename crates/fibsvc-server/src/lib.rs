//! fibsvc server library entry.
//!
//! Wires config, shared state, the metrics timing guard, and the four HTTP
//! endpoints into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod respond;
pub mod router;
