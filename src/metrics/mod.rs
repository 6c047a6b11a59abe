use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by a drag session.
#[derive(Debug, Default, Clone)]
pub struct GridMetrics {
    draws: u64,
    tiles_drawn: u64,
    tiles_suppressed: u64,
    lookups: u64,
    lookup_failures: u64,
    motions: u64,
}

impl GridMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_draw(&mut self, tiles: usize, suppressed: usize) {
        self.draws = self.draws.saturating_add(1);
        self.tiles_drawn = self.tiles_drawn.saturating_add(tiles as u64);
        self.tiles_suppressed = self.tiles_suppressed.saturating_add(suppressed as u64);
    }

    pub fn record_lookup(&mut self, found: bool) {
        self.lookups = self.lookups.saturating_add(1);
        if !found {
            self.lookup_failures = self.lookup_failures.saturating_add(1);
        }
    }

    pub fn record_motions(&mut self, count: usize) {
        self.motions = self.motions.saturating_add(count as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            draws: self.draws,
            tiles_drawn: self.tiles_drawn,
            tiles_suppressed: self.tiles_suppressed,
            lookups: self.lookups,
            lookup_failures: self.lookup_failures,
            motions: self.motions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub draws: u64,
    pub tiles_drawn: u64,
    pub tiles_suppressed: u64,
    pub lookups: u64,
    pub lookup_failures: u64,
    pub motions: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "grid_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("draws".to_string(), json!(self.draws));
        map.insert("tiles_drawn".to_string(), json!(self.tiles_drawn));
        map.insert("tiles_suppressed".to_string(), json!(self.tiles_suppressed));
        map.insert("lookups".to_string(), json!(self.lookups));
        map.insert("lookup_failures".to_string(), json!(self.lookup_failures));
        map.insert("motions".to_string(), json!(self.motions));
        map
    }
}
