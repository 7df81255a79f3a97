//! In-memory metric storage.
//!
//! Two independent maps: name -> cumulative counter, name -> latest gauge.
//! Each map is a `DashMap`, so every mutation holds the shard lock of its key
//! for the duration of the read-modify-write. Updates to one name are applied
//! in a single serial order; updates to different names may run in parallel.
//! Entries are created lazily and never removed.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::update::MetricUpdate;

#[derive(Debug, Default)]
pub struct MemStorage {
    counters: DashMap<String, i64>,
    gauges: DashMap<String, f64>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            gauges: DashMap::new(),
        }
    }

    /// Add `delta` to the counter (absent counts as zero). Overflow wraps.
    pub fn increment_counter(&self, name: &str, delta: i64) {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(mut e) => {
                let v = e.get_mut();
                *v = v.wrapping_add(delta);
            }
            Entry::Vacant(e) => {
                tracing::debug!(name, "counter registered");
                e.insert(delta);
            }
        }
    }

    /// Replace the gauge value. NaN and infinities are stored as given.
    pub fn set_gauge(&self, name: &str, value: f64) {
        if self.gauges.insert(name.to_string(), value).is_none() {
            tracing::debug!(name, "gauge registered");
        }
    }

    pub fn apply(&self, update: &MetricUpdate) {
        match update {
            MetricUpdate::Counter { name, delta } => self.increment_counter(name, *delta),
            MetricUpdate::Gauge { name, value } => self.set_gauge(name, *value),
        }
    }

    pub fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).map(|r| *r.value())
    }

    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).map(|r| *r.value())
    }

    pub fn counters_len(&self) -> usize {
        self.counters.len()
    }

    pub fn gauges_len(&self) -> usize {
        self.gauges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_accumulates() {
        let s = MemStorage::new();
        assert_eq!(s.counter("requests"), None);
        s.increment_counter("requests", 5);
        s.increment_counter("requests", 3);
        assert_eq!(s.counter("requests"), Some(8));
    }

    #[test]
    fn counter_accepts_zero_and_negative() {
        let s = MemStorage::new();
        s.increment_counter("c", 0);
        assert_eq!(s.counter("c"), Some(0));
        s.increment_counter("c", -10);
        assert_eq!(s.counter("c"), Some(-10));
    }

    #[test]
    fn counter_overflow_wraps() {
        let s = MemStorage::new();
        s.increment_counter("c", i64::MAX);
        s.increment_counter("c", 1);
        assert_eq!(s.counter("c"), Some(i64::MIN));
    }

    #[test]
    fn gauge_last_write_wins() {
        let s = MemStorage::new();
        s.set_gauge("t", 1.0);
        s.set_gauge("t", 36.6);
        assert_eq!(s.gauge("t"), Some(36.6));
        s.set_gauge("t", 36.6);
        assert_eq!(s.gauge("t"), Some(36.6));
        assert_eq!(s.gauges_len(), 1);
    }

    #[test]
    fn gauge_stores_non_finite() {
        let s = MemStorage::new();
        s.set_gauge("nan", f64::NAN);
        s.set_gauge("inf", f64::INFINITY);
        assert!(s.gauge("nan").is_some_and(f64::is_nan));
        assert_eq!(s.gauge("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn same_name_in_both_maps() {
        let s = MemStorage::new();
        s.increment_counter("x", 2);
        s.set_gauge("x", 0.5);
        assert_eq!(s.counter("x"), Some(2));
        assert_eq!(s.gauge("x"), Some(0.5));
    }

    #[test]
    fn empty_name_is_a_key() {
        let s = MemStorage::new();
        s.apply(&MetricUpdate::Counter { name: String::new(), delta: 1 });
        assert_eq!(s.counter(""), Some(1));
        assert_eq!(s.counters_len(), 1);
        assert_eq!(s.gauges_len(), 0);
    }
}
