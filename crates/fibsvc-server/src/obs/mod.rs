//! Request observation.
//!
//! `EndpointTimer` is the per-request scope guard that feeds the metrics
//! registry.

pub mod timer;

pub use timer::EndpointTimer;
