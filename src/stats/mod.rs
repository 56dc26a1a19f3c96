//! Per-metric summary statistics and their memoizing cache.

mod cache;
mod summary;

pub use cache::{CacheError, CacheKey, CacheStats, DEFAULT_CACHE_CAPACITY, StatisticsCache};
pub use summary::{MetricStatistics, StatSummary};
