use std::sync::Arc;
use std::time::Instant;

use fibsvc_core::metrics::{Endpoint, MetricsRegistry};

/// Records one request against `endpoint` when dropped.
///
/// Create it first thing in a handler and keep it alive until the response
/// (including its serialized body) is built. The update runs exactly once,
/// on success and error paths alike.
pub struct EndpointTimer {
    registry: Arc<MetricsRegistry>,
    endpoint: Endpoint,
    started: Instant,
}

impl EndpointTimer {
    pub fn start(registry: Arc<MetricsRegistry>, endpoint: Endpoint) -> Self {
        Self {
            registry,
            endpoint,
            started: Instant::now(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

impl Drop for EndpointTimer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let rec = self.registry.record(self.endpoint, elapsed);
        tracing::debug!(
            endpoint = %self.endpoint,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            request_count = rec.request_count,
            "request recorded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_records_exactly_once() {
        let reg = Arc::new(MetricsRegistry::default());
        {
            let t = EndpointTimer::start(reg.clone(), Endpoint::Ready);
            assert_eq!(t.endpoint(), Endpoint::Ready);
            assert_eq!(reg.get(Endpoint::Ready).request_count, 0);
        }
        let rec = reg.get(Endpoint::Ready);
        assert_eq!(rec.request_count, 1);
        assert!(rec.total_duration_ms >= 0.0);
        assert_eq!(reg.get(Endpoint::Health).request_count, 0);
    }
}
