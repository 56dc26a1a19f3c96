use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use indexmap::IndexMap;
use thiserror::Error;

use super::summary::MetricStatistics;
use crate::dataset::{Dataset, Fingerprint, extract_series};

/// Default number of (dataset, metric) entries kept before LRU eviction.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("metric '{metric}' not found")]
    MetricNotFound {
        metric: String,
        available: Vec<String>,
    },

    #[error("cannot summarize '{metric}': {reason}")]
    Computation { metric: String, reason: String },
}

/// Cache key: content fingerprint of the dataset plus metric name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub fingerprint: Fingerprint,
    pub metric: String,
}

/// Counters describing cache behavior since creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an existing entry, finished or still computing.
    pub hits: u64,
    pub misses: u64,
    /// Times the summary computation actually ran.
    pub computations: u64,
    pub evictions: u64,
}

type Computed = Result<Arc<MetricStatistics>, CacheError>;
type Slot = Arc<OnceLock<Computed>>;

/// Bounded LRU cache of per-metric statistics.
///
/// The mutex only guards the LRU index. Each entry is a `OnceLock`, so
/// concurrent callers for one key block on the same slot while a single
/// caller computes, and all of them get the same `Arc`.
#[derive(Debug)]
pub struct StatisticsCache {
    capacity: usize,
    entries: Mutex<IndexMap<CacheKey, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
    computations: AtomicU64,
    evictions: AtomicU64,
}

impl Default for StatisticsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl StatisticsCache {
    /// Create a cache holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(IndexMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            computations: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Statistics of `metric` for every suite, computed at most once per
    /// (fingerprint, metric) while the entry stays cached.
    ///
    /// # Errors
    /// - `MetricNotFound` if the metric is not discoverable (never cached)
    /// - `Computation` if some suite lacks the metric
    pub fn get_or_compute(&self, dataset: &Dataset, metric: &str) -> Computed {
        if !dataset.has_metric(metric) {
            return Err(CacheError::MetricNotFound {
                metric: metric.to_string(),
                available: dataset.metrics().to_vec(),
            });
        }

        let key = CacheKey {
            fingerprint: dataset.fingerprint().clone(),
            metric: metric.to_string(),
        };
        let slot = self.slot_for(key);

        let computed = slot
            .get_or_init(|| {
                self.computations.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    metric,
                    fingerprint = dataset.fingerprint().short(),
                    "computing statistics"
                );
                extract_series(dataset, metric, None)
                    .map(|series| Arc::new(MetricStatistics::from_series(&series)))
                    .map_err(|e| CacheError::Computation {
                        metric: metric.to_string(),
                        reason: e.to_string(),
                    })
            })
            .clone();

        // The slot just finished, so an overshoot left by in-flight entries can shrink.
        self.evict_overflow(&mut self.entries.lock().unwrap_or_else(PoisonError::into_inner));
        computed
    }

    /// Cached statistics if already computed, without computing or touching recency.
    #[must_use]
    pub fn peek(&self, dataset: &Dataset, metric: &str) -> Option<Arc<MetricStatistics>> {
        let key = CacheKey {
            fingerprint: dataset.fingerprint().clone(),
            metric: metric.to_string(),
        };
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&key)
            .and_then(|slot| slot.get())
            .and_then(|computed| computed.as_ref().ok())
            .cloned()
    }

    /// Find or create the slot for `key`, marking it most recently used.
    fn slot_for(&self, key: CacheKey) -> Slot {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(index) = entries.get_index_of(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            let last = entries.len() - 1;
            entries.move_index(index, last);
            return Arc::clone(&entries[last]);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let slot = Slot::default();
        entries.insert(key, Arc::clone(&slot));

        self.evict_overflow(&mut entries);
        slot
    }

    /// Drop least recently used finished entries while over capacity.
    ///
    /// Slots still computing are never dropped, so a later request for the
    /// same key joins the running computation. The index may exceed capacity
    /// until those slots finish.
    fn evict_overflow(&self, entries: &mut IndexMap<CacheKey, Slot>) {
        while entries.len() > self.capacity {
            let Some(index) = entries.values().position(|slot| slot.get().is_some()) else {
                break;
            };
            if let Some((evicted, _)) = entries.shift_remove_index(index) {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(metric = %evicted.metric, "evicted statistics entry");
            }
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an entry for (`dataset`, `metric`) is present.
    #[must_use]
    pub fn contains(&self, dataset: &Dataset, metric: &str) -> bool {
        let key = CacheKey {
            fingerprint: dataset.fingerprint().clone(),
            metric: metric.to_string(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
