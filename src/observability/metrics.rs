//! Metrics registry for the footnote collection
//!
//! - Counters only
//! - Monotonic increase
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Records created by `add`
    footnotes_added: AtomicU64,
    /// Adds that took the tail-append fast path
    fast_path_appends: AtomicU64,
    /// Adds that collided with an existing id
    collision_inserts: AtomicU64,
    /// Adds that landed in a gap below the last id
    gap_inserts: AtomicU64,
    /// Total id shifts performed
    records_shifted: AtomicU64,
    /// Lookups by reference id
    lookups: AtomicU64,
    /// Lookups that found nothing
    lookup_misses: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_fast_path_appends(&self) {
        self.footnotes_added.fetch_add(1, Ordering::Relaxed);
        self.fast_path_appends.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_gap_inserts(&self) {
        self.footnotes_added.fetch_add(1, Ordering::Relaxed);
        self.gap_inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a collision insert that shifted `shifted` records
    pub fn record_collision_insert(&self, shifted: u64) {
        self.footnotes_added.fetch_add(1, Ordering::Relaxed);
        self.collision_inserts.fetch_add(1, Ordering::Relaxed);
        self.records_shifted.fetch_add(shifted, Ordering::Relaxed);
    }

    /// Count a lookup and whether it hit
    pub fn record_lookup(&self, hit: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !hit {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            footnotes_added: self.footnotes_added.load(Ordering::Relaxed),
            fast_path_appends: self.fast_path_appends.load(Ordering::Relaxed),
            collision_inserts: self.collision_inserts.load(Ordering::Relaxed),
            gap_inserts: self.gap_inserts.load(Ordering::Relaxed),
            records_shifted: self.records_shifted.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }

    /// Current snapshot as a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub footnotes_added: u64,
    pub fast_path_appends: u64,
    pub collision_inserts: u64,
    pub gap_inserts: u64,
    pub records_shifted: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.footnotes_added, 0);
        assert_eq!(snapshot.records_shifted, 0);
        assert_eq!(snapshot.lookups, 0);
    }

    #[test]
    fn test_every_add_path_counts_as_added() {
        let registry = MetricsRegistry::new();
        registry.increment_fast_path_appends();
        registry.increment_gap_inserts();
        registry.record_collision_insert(3);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.footnotes_added, 3);
        assert_eq!(snapshot.fast_path_appends, 1);
        assert_eq!(snapshot.gap_inserts, 1);
        assert_eq!(snapshot.collision_inserts, 1);
        assert_eq!(snapshot.records_shifted, 3);
    }

    #[test]
    fn test_lookup_misses() {
        let registry = MetricsRegistry::new();
        registry.record_lookup(true);
        registry.record_lookup(false);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.lookups, 2);
        assert_eq!(snapshot.lookup_misses, 1);
    }

    #[test]
    fn test_to_json() {
        let registry = MetricsRegistry::new();
        registry.record_collision_insert(2);

        let parsed: serde_json::Value = serde_json::from_str(&registry.to_json()).unwrap();
        assert_eq!(parsed["records_shifted"], 2);
        assert_eq!(parsed["collision_inserts"], 1);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_fast_path_appends();
                    reg.record_lookup(true);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.footnotes_added, 1000);
        assert_eq!(snapshot.lookups, 1000);
    }
}
