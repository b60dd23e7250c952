use super::dto::{LookupRequest, RepresentativeLookup};
use crate::{
    application::{
        resolve_location::LocationResolver,
        summarize_representative::RepresentativeSummaryCache,
    },
    domain::location::errors::DataLoadError,
    infrastructure::llm::traits::SummaryRequest,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// "Find my MLA": pincode → location → MLA → summary.
pub struct LookupRepresentativeUseCase {
    resolver: Arc<LocationResolver>,
    summaries: Arc<RepresentativeSummaryCache>,
}

impl LookupRepresentativeUseCase {
    pub fn new(
        resolver: Arc<LocationResolver>,
        summaries: Arc<RepresentativeSummaryCache>,
    ) -> Self {
        Self {
            resolver,
            summaries,
        }
    }

    /// Returns `Ok(None)` for malformed or uncovered pincodes.
    ///
    /// # Errors
    /// Only when a dataset cannot be loaded.
    #[instrument(skip(self, request), fields(pincode = %request.pincode))]
    pub async fn execute(
        &self,
        request: LookupRequest,
    ) -> Result<Option<RepresentativeLookup>, DataLoadError> {
        let Some(location) = self.resolver.resolve_location(&request.pincode).await? else {
            return Ok(None);
        };

        let representative = self
            .resolver
            .find_representative(location.assembly_constituency.as_deref())
            .await?;

        let summary_request = match (
            &location.district,
            &location.assembly_constituency,
            representative.as_ref().and_then(|mla| mla.mla_name.as_ref()),
        ) {
            (Some(district), Some(constituency), Some(mla_name)) => Some(SummaryRequest {
                district: district.clone(),
                assembly_constituency: constituency.clone(),
                mla_name: mla_name.clone(),
                issue_category: request.issue_category.clone(),
            }),
            _ => None,
        };

        let summary = match summary_request {
            Some(summary_request) => Some(self.summaries.get_summary(&summary_request).await),
            None => None,
        };

        info!(
            source = ?location.source,
            has_representative = representative.is_some(),
            "Representative lookup completed"
        );

        Ok(Some(RepresentativeLookup {
            pincode: request.pincode,
            location,
            representative,
            summary,
            looked_up_at: chrono::Utc::now(),
        }))
    }
}
