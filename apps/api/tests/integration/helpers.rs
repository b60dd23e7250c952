use async_trait::async_trait;
use civic_api::{
    application::{
        lookup_representative::LookupRepresentativeUseCase, resolve_location::LocationResolver,
        summarize_representative::RepresentativeSummaryCache,
    },
    infrastructure::{
        datasets::JsonDatasetLoader,
        llm::{ActionPlan, GenerationError, IssueReport, LlmService, SummaryRequest},
    },
};
use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Loader over the datasets shipped in `data/`.
pub fn sample_loader() -> Arc<JsonDatasetLoader> {
    Arc::new(JsonDatasetLoader::new(
        data_dir().join("mh_pincode_sample.json"),
        data_dir().join("mh_mla_sample.json"),
    ))
}

pub fn sample_resolver() -> Arc<LocationResolver> {
    Arc::new(LocationResolver::new(sample_loader()))
}

/// Generator double that counts calls, optionally sleeping or failing.
pub struct CountingLlm {
    pub summary_calls: AtomicUsize,
    delay: Duration,
    fail: bool,
}

impl CountingLlm {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            summary_calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            fail: false,
        })
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            summary_calls: AtomicUsize::new(0),
            delay,
            fail: false,
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            summary_calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmService for CountingLlm {
    async fn summarize_representative(
        &self,
        request: &SummaryRequest,
    ) -> Result<String, GenerationError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(GenerationError::NotConfigured);
        }
        Ok(format!(
            "{} serves {} in {}.",
            request.mla_name, request.assembly_constituency, request.district
        ))
    }

    async fn draft_action_plan(&self, _issue: &IssueReport) -> Result<ActionPlan, GenerationError> {
        Err(GenerationError::NotConfigured)
    }

    async fn chat(&self, _query: &str) -> Result<String, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}

pub fn lookup_use_case(llm: Arc<CountingLlm>) -> LookupRepresentativeUseCase {
    LookupRepresentativeUseCase::new(
        sample_resolver(),
        Arc::new(RepresentativeSummaryCache::new(llm)),
    )
}
