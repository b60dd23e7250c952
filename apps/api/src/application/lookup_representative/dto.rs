use crate::domain::location::entity::{MlaRecord, ResolutionResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LookupRequest {
    pub pincode: String,
    pub issue_category: Option<String>,
}

/// Everything known about who represents a pincode.
///
/// `representative` is `None` when the constituency is unknown or has no MLA
/// on file; `summary` is `None` whenever `representative` lacks a name.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RepresentativeLookup {
    pub pincode: String,
    pub location: ResolutionResult,
    pub representative: Option<MlaRecord>,
    pub summary: Option<String>,
    pub looked_up_at: DateTime<Utc>,
}
