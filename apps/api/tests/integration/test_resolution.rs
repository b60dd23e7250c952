use super::helpers::{sample_loader, sample_resolver};
use civic_api::{
    application::resolve_location::LocationResolver,
    domain::location::{
        entity::ResolutionSource, errors::DataLoadError, ranges::find_district_range,
        repository::LocationDataSource,
    },
    infrastructure::datasets::JsonDatasetLoader,
};
use std::sync::Arc;

#[tokio::test]
async fn colaba_pincode_resolves_exactly() {
    let result = sample_resolver()
        .resolve_location("400001")
        .await
        .expect("datasets should load")
        .expect("400001 is in the sample dataset");

    assert_eq!(result.district.as_deref(), Some("Mumbai City"));
    assert_eq!(result.state.as_deref(), Some("Maharashtra"));
    assert_eq!(result.assembly_constituency.as_deref(), Some("Colaba"));
    assert_eq!(result.source, ResolutionSource::Exact);
}

#[tokio::test]
async fn sampled_pincode_without_constituency_keeps_it_absent() {
    let result = sample_resolver()
        .resolve_location("400703")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.district.as_deref(), Some("Thane"));
    assert_eq!(result.assembly_constituency, None);
}

#[tokio::test]
async fn unsampled_pincode_falls_back_to_range() {
    let result = sample_resolver()
        .resolve_location("416425")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.district.as_deref(), Some("Sangli"));
    assert_eq!(result.state.as_deref(), Some("Maharashtra"));
    assert_eq!(result.assembly_constituency, None);
    assert_eq!(result.source, ResolutionSource::Range);
}

#[tokio::test]
async fn range_table_agrees_with_sampled_districts() {
    let table = sample_loader().load_pincode_table().await.unwrap();
    for (pincode, entry) in table.iter() {
        let number: u32 = pincode.parse().unwrap();
        if let Some(band) = find_district_range(number) {
            assert_eq!(
                entry.district.as_deref(),
                Some(band.district),
                "range band disagrees with exact entry for {pincode}"
            );
        }
    }
}

#[tokio::test]
async fn uncovered_and_malformed_pincodes_are_absent() {
    let resolver = sample_resolver();
    for pincode in ["416500", "560001", "abc123", "", "4000", "4000010"] {
        assert!(
            resolver.resolve_location(pincode).await.unwrap().is_none(),
            "{pincode:?} should not resolve"
        );
    }
}

#[tokio::test]
async fn malformed_pincode_is_answered_even_when_data_is_missing() {
    let loader = Arc::new(JsonDatasetLoader::new(
        "/nonexistent/pins.json",
        "/nonexistent/mlas.json",
    ));
    let resolver = LocationResolver::new(loader);

    assert!(resolver.resolve_location("abc123").await.unwrap().is_none());
    assert!(matches!(
        resolver.resolve_location("400001").await,
        Err(DataLoadError::Io { .. })
    ));
}

#[tokio::test]
async fn representative_lookup_matches_sample_data() {
    let resolver = sample_resolver();
    let colaba = resolver
        .find_representative(Some("Colaba"))
        .await
        .unwrap()
        .expect("Colaba MLA on file");
    assert!(colaba.mla_name.is_some());
    assert_eq!(colaba.phone, None);

    assert!(
        resolver
            .find_representative(Some("NonexistentConstituency"))
            .await
            .unwrap()
            .is_none()
    );
    // Sangli is in the pincode sample but has no MLA record.
    assert!(resolver.find_representative(Some("Sangli")).await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_first_access_sees_one_table() {
    let loader = sample_loader();
    let (a, b, c) = tokio::join!(
        loader.load_pincode_table(),
        loader.load_pincode_table(),
        loader.load_pincode_table()
    );
    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&b, &c));
}
