//! Per-endpoint request metrics.
//!
//! The registry is seeded with one `MetricRecord` per `Endpoint` and never
//! grows or shrinks afterwards. Records live in a `DashMap`; `record` does its
//! read-modify-write while holding the entry's write guard, so concurrent
//! requests to the same endpoint never lose an update.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::FibsvcError;

/// The fixed set of endpoints the service tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Health,
    Ready,
    Payload,
    Metrics,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Health,
        Endpoint::Ready,
        Endpoint::Payload,
        Endpoint::Metrics,
    ];

    /// Name used as the key in `/metrics` output.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::Ready => "ready",
            Endpoint::Payload => "payload",
            Endpoint::Metrics => "metrics",
        }
    }

    /// HTTP route serving this endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::Ready => "/ready",
            Endpoint::Payload => "/payload",
            Endpoint::Metrics => "/metrics",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = FibsvcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| FibsvcError::UnknownEndpoint(s.to_string()))
    }
}

/// Accumulated latency for one endpoint. Durations are in milliseconds.
///
/// Invariant: `average_latency_ms == total_duration_ms / request_count`
/// (after rounding) whenever `request_count > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "RequestCount")]
    pub request_count: u64,
    #[serde(rename = "TotalDuration")]
    pub total_duration_ms: f64,
    #[serde(rename = "AverageLatency")]
    pub average_latency_ms: f64,
}

/// Rounding applied to reported durations.
///
/// `decimal_places(p)` multiplies by `10^p`, rounds half away from zero
/// (`f64::round`), then divides back. Values sitting on a binary-inexact .5
/// boundary may round either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rounding {
    places: Option<u32>,
}

impl Rounding {
    pub fn none() -> Self {
        Self { places: None }
    }

    pub fn decimal_places(places: u32) -> Self {
        Self { places: Some(places) }
    }

    pub fn places(&self) -> Option<u32> {
        self.places
    }

    pub fn apply(&self, v: f64) -> f64 {
        match self.places {
            None => v,
            Some(p) => {
                let factor = 10f64.powi(p as i32);
                (v * factor).round() / factor
            }
        }
    }
}

/// Endpoint name -> accumulating `MetricRecord`.
pub struct MetricsRegistry {
    records: DashMap<Endpoint, MetricRecord>,
    rounding: Rounding,
}

impl MetricsRegistry {
    pub fn new(rounding: Rounding) -> Self {
        let records = DashMap::new();
        for e in Endpoint::ALL {
            records.insert(e, MetricRecord::default());
        }
        Self { records, rounding }
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Fold one completed request into the endpoint's record.
    /// Returns a copy of the record as it stands after the update.
    pub fn record(&self, endpoint: Endpoint, elapsed: Duration) -> MetricRecord {
        let elapsed_ms = elapsed.as_nanos() as f64 / 1_000_000.0;

        // Every endpoint is seeded in `new`, so this never inserts.
        let mut rec = self.records.entry(endpoint).or_default();
        rec.total_duration_ms = self.rounding.apply(rec.total_duration_ms + elapsed_ms);
        rec.request_count += 1;
        rec.average_latency_ms = self
            .rounding
            .apply(rec.total_duration_ms / rec.request_count as f64);
        *rec
    }

    pub fn get(&self, endpoint: Endpoint) -> MetricRecord {
        self.records
            .get(&endpoint)
            .map(|r| *r.value())
            .unwrap_or_default()
    }

    /// Owned copy of every record, ordered by endpoint name.
    pub fn snapshot(&self) -> BTreeMap<&'static str, MetricRecord> {
        self.records
            .iter()
            .map(|r| (r.key().as_str(), *r.value()))
            .collect()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new(Rounding::none())
    }
}
