use crate::domain::location::{
    entity::{MlaRecord, ResolutionResult},
    errors::DataLoadError,
    ranges::{RANGE_TABLE_STATE, find_district_range},
    repository::LocationDataSource,
    value_objects::PinCode,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Turns pincodes into locations and constituencies into MLAs.
///
/// Lookup order for a pincode is the exact dataset, then the district range
/// table, then nothing. Malformed input is answered with `Ok(None)` before
/// any table is touched; the only error is a dataset that fails to load.
pub struct LocationResolver {
    source: Arc<dyn LocationDataSource>,
}

impl LocationResolver {
    pub fn new(source: Arc<dyn LocationDataSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn resolve_location(
        &self,
        pincode: &str,
    ) -> Result<Option<ResolutionResult>, DataLoadError> {
        let Some(pin) = PinCode::parse(pincode) else {
            debug!("Rejected malformed pincode");
            return Ok(None);
        };

        let table = self.source.load_pincode_table().await?;
        if let Some(entry) = table.get(pin.as_str()) {
            debug!("Exact pincode match");
            return Ok(Some(ResolutionResult::from_entry(entry)));
        }

        match find_district_range(pin.as_number()) {
            Some(range) => {
                debug!(district = range.district, "Pincode resolved by district range");
                Ok(Some(ResolutionResult::from_range(range, RANGE_TABLE_STATE)))
            }
            None => {
                debug!("Pincode outside known coverage");
                Ok(None)
            }
        }
    }

    /// MLA on file for a constituency. There is no fallback tier: a miss
    /// means "no representative on file".
    #[instrument(skip(self))]
    pub async fn find_representative(
        &self,
        constituency: Option<&str>,
    ) -> Result<Option<MlaRecord>, DataLoadError> {
        let Some(name) = constituency.filter(|name| !name.trim().is_empty()) else {
            return Ok(None);
        };

        let table = self.source.load_mla_table().await?;
        let record = table.get(name).cloned();
        if record.is_none() {
            debug!("No representative on file");
        }
        Ok(record)
    }
}
