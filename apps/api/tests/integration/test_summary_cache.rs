use super::helpers::CountingLlm;
use civic_api::{
    application::summarize_representative::{RepresentativeSummaryCache, fallback_summary},
    infrastructure::llm::SummaryRequest,
};
use std::time::Duration;

fn kothrud(issue_category: Option<&str>) -> SummaryRequest {
    SummaryRequest {
        district: "Pune".into(),
        assembly_constituency: "Kothrud".into(),
        mla_name: "Chandrakant Patil".into(),
        issue_category: issue_category.map(str::to_string),
    }
}

#[tokio::test]
async fn identical_requests_generate_once() {
    let llm = CountingLlm::working();
    let cache = RepresentativeSummaryCache::new(llm.clone());

    let first = cache.get_summary(&kothrud(Some("Road"))).await;
    let second = cache.get_summary(&kothrud(Some("Road"))).await;

    assert_eq!(first, second);
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn concurrent_identical_requests_collapse() {
    let llm = CountingLlm::slow(Duration::from_millis(150));
    let cache = RepresentativeSummaryCache::new(llm.clone());
    let request = kothrud(None);

    let (a, b) = tokio::join!(cache.get_summary(&request), cache.get_summary(&request));

    assert_eq!(a, b);
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn unavailable_generator_yields_stable_fallback_and_retries() {
    let llm = CountingLlm::unavailable();
    let cache = RepresentativeSummaryCache::new(llm.clone());

    let a = cache.get_summary(&kothrud(Some("Water"))).await;
    let b = cache.get_summary(&kothrud(Some("Water"))).await;

    assert_eq!(a, b);
    assert_eq!(a, fallback_summary(&kothrud(Some("Water"))));
    // Fallbacks are never cached, so each call tried the generator.
    assert_eq!(llm.calls(), 2);
    assert_eq!(cache.stats().fallbacks, 2);
}
