use super::helpers::{CountingLlm, lookup_use_case, sample_resolver};
use civic_api::{
    application::{
        lookup_representative::{LookupRepresentativeUseCase, dto::LookupRequest},
        summarize_representative::RepresentativeSummaryCache,
    },
    domain::location::entity::ResolutionSource,
};
use std::sync::Arc;

fn request(pincode: &str, issue_category: Option<&str>) -> LookupRequest {
    LookupRequest {
        pincode: pincode.to_string(),
        issue_category: issue_category.map(str::to_string),
    }
}

#[tokio::test]
async fn known_constituency_returns_mla_and_summary() {
    let llm = CountingLlm::working();
    let use_case = lookup_use_case(llm.clone());

    let lookup = use_case
        .execute(request("400001", Some("Road")))
        .await
        .unwrap()
        .expect("400001 resolves");

    assert_eq!(lookup.location.assembly_constituency.as_deref(), Some("Colaba"));
    let mla = lookup.representative.expect("Colaba has an MLA on file");
    assert_eq!(mla.assembly_constituency, "Colaba");
    let summary = lookup.summary.expect("summary for a named MLA");
    assert!(summary.contains("Colaba"));
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn pincodes_sharing_a_constituency_share_the_summary() {
    let llm = CountingLlm::working();
    let use_case = lookup_use_case(llm.clone());

    let a = use_case.execute(request("400001", None)).await.unwrap().unwrap();
    let b = use_case.execute(request("400005", None)).await.unwrap().unwrap();

    assert_eq!(a.summary, b.summary);
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn shared_summary_cache_reports_lookup_activity() {
    let summaries = Arc::new(RepresentativeSummaryCache::with_capacity(
        CountingLlm::working(),
        8,
    ));
    let use_case = LookupRepresentativeUseCase::new(sample_resolver(), summaries.clone());

    use_case.execute(request("400001", None)).await.unwrap();
    use_case.execute(request("400005", None)).await.unwrap();
    use_case.execute(request("416425", None)).await.unwrap();

    let stats = summaries.stats();
    assert_eq!(stats.generations, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.fallbacks, 0);
}

#[tokio::test]
async fn range_match_has_no_representative_or_summary() {
    let llm = CountingLlm::working();
    let use_case = lookup_use_case(llm.clone());

    let lookup = use_case
        .execute(request("416010", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(lookup.location.source, ResolutionSource::Range);
    assert_eq!(lookup.location.district.as_deref(), Some("Kolhapur"));
    assert!(lookup.representative.is_none());
    assert!(lookup.summary.is_none());
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn constituency_without_mla_record_skips_summary() {
    let llm = CountingLlm::working();
    let lookup = lookup_use_case(llm.clone())
        .execute(request("416416", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(lookup.location.assembly_constituency.as_deref(), Some("Sangli"));
    assert!(lookup.representative.is_none());
    assert!(lookup.summary.is_none());
}

#[tokio::test]
async fn invalid_pincode_returns_nothing() {
    let use_case = lookup_use_case(CountingLlm::working());
    assert!(use_case.execute(request("abc123", None)).await.unwrap().is_none());
    assert!(use_case.execute(request("416500", None)).await.unwrap().is_none());
}
