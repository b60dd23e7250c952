use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Counters since the cache was created. `entries` is approximate while
/// evictions are still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryCacheStats {
    /// Calls answered by a stored summary, including callers that waited on
    /// another caller's in-flight generation.
    pub hits: u64,
    /// Generator invocations.
    pub generations: u64,
    /// Calls answered with the templated fallback.
    pub fallbacks: u64,
    pub entries: u64,
}
