//! Shared application state for the fibsvc server.
//!
//! Owns the immutable config and the single metrics registry; handlers get
//! it through axum `State`.

use std::sync::Arc;

use fibsvc_core::metrics::MetricsRegistry;

use crate::config::ServiceConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<MetricsRegistry>,
}

struct AppStateInner {
    cfg: ServiceConfig,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        let registry = Arc::new(MetricsRegistry::new(cfg.rounding()));
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            registry,
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.registry)
    }
}
