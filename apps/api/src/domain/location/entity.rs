use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// One row of the pincode dataset.
///
/// Every field except the key may be missing in the source data; a missing
/// field stays `None` and is never replaced with an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PincodeEntry {
    pub pincode: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub assembly_constituency: Option<String>,
}

/// Contact sheet for the MLA of one assembly constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MlaRecord {
    pub assembly_constituency: String,
    #[serde(default)]
    pub mla_name: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

pub type PincodeTable = HashMap<String, PincodeEntry>;
pub type MlaTable = HashMap<String, MlaRecord>;

/// Inclusive band of pincodes belonging to one district.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictRange {
    pub start: u32,
    pub end: u32,
    pub district: &'static str,
}

impl DistrictRange {
    pub const fn new(start: u32, end: u32, district: &'static str) -> Self {
        Self {
            start,
            end,
            district,
        }
    }

    pub fn contains(&self, pincode: u32) -> bool {
        self.start <= pincode && pincode <= self.end
    }
}

/// Which lookup tier produced a [`ResolutionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResolutionSource {
    /// The pincode is present in the pincode dataset.
    Exact,
    /// Only the district band matched; the constituency is unknown.
    Range,
}

/// Location resolved for a single pincode.
///
/// `assembly_constituency == None` together with `Some(district)` means
/// "district known, representative unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolutionResult {
    pub district: Option<String>,
    pub state: Option<String>,
    pub assembly_constituency: Option<String>,
    pub source: ResolutionSource,
}

impl ResolutionResult {
    pub fn from_entry(entry: &PincodeEntry) -> Self {
        Self {
            district: entry.district.clone(),
            state: entry.state.clone(),
            assembly_constituency: entry.assembly_constituency.clone(),
            source: ResolutionSource::Exact,
        }
    }

    pub fn from_range(range: &DistrictRange, state: &str) -> Self {
        Self {
            district: Some(range.district.to_string()),
            state: Some(state.to_string()),
            assembly_constituency: None,
            source: ResolutionSource::Range,
        }
    }
}
