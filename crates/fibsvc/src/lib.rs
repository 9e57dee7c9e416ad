//! Top-level facade crate for fibsvc.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use fibsvc_core::*;
}

pub mod server {
    pub use fibsvc_server::*;
}
