use super::dto::SummaryCacheStats;
use crate::infrastructure::llm::traits::{LlmService, SummaryRequest};
use moka::{future::Cache, policy::EvictionPolicy};
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};
use tracing::{debug, instrument, warn};

pub const DEFAULT_SUMMARY_CACHE_CAPACITY: u64 = 100;

/// LRU cache in front of the representative summary generator.
///
/// Concurrent misses for one key share a single generator call. Failed
/// generations are never stored: the caller gets [`fallback_summary`] and the
/// next call for the same key tries the generator again.
pub struct RepresentativeSummaryCache {
    llm: Arc<dyn LlmService>,
    entries: Cache<SummaryRequest, String>,
    hits: AtomicU64,
    generations: AtomicU64,
    fallbacks: AtomicU64,
}

impl RepresentativeSummaryCache {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self::with_capacity(llm, DEFAULT_SUMMARY_CACHE_CAPACITY)
    }

    pub fn with_capacity(llm: Arc<dyn LlmService>, capacity: u64) -> Self {
        Self {
            llm,
            entries: Cache::builder()
                .max_capacity(capacity)
                .eviction_policy(EvictionPolicy::lru())
                .build(),
            hits: AtomicU64::new(0),
            generations: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
        }
    }

    #[instrument(skip(self, request), fields(
        district = %request.district,
        constituency = %request.assembly_constituency,
        issue_category = ?request.issue_category,
    ))]
    pub async fn get_summary(&self, request: &SummaryRequest) -> String {
        let generated_here = AtomicBool::new(false);

        let result = self
            .entries
            .try_get_with(request.clone(), async {
                generated_here.store(true, Ordering::Relaxed);
                self.generations.fetch_add(1, Ordering::Relaxed);
                self.llm.summarize_representative(request).await
            })
            .await;

        match result {
            Ok(summary) => {
                if generated_here.load(Ordering::Relaxed) {
                    debug!("Summary cache MISS, generated and stored");
                } else {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!("Summary cache HIT");
                }
                summary
            }
            Err(e) => {
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "Summary generation failed, serving templated fallback");
                fallback_summary(request)
            }
        }
    }

    pub fn stats(&self) -> SummaryCacheStats {
        SummaryCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            generations: self.generations.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            entries: self.entries.entry_count(),
        }
    }
}

/// Description built only from the request fields.
pub fn fallback_summary(request: &SummaryRequest) -> String {
    let mut text = format!(
        "{} represents the {} assembly constituency in {} district, Maharashtra. \
         MLAs handle local issues such as infrastructure, public services, and constituent welfare.",
        request.mla_name, request.assembly_constituency, request.district
    );
    if let Some(category) = &request.issue_category {
        text.push_str(&format!(
            " Concerns about {} issues can be raised with their constituency office.",
            category
        ));
    }
    text
}
