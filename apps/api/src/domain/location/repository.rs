use super::{
    entity::{MlaTable, PincodeTable},
    errors::DataLoadError,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Source of the two reference tables.
///
/// Implementations load each table at most once and hand out the same
/// shared mapping on every call.
#[async_trait]
pub trait LocationDataSource: Send + Sync {
    async fn load_pincode_table(&self) -> Result<Arc<PincodeTable>, DataLoadError>;
    async fn load_mla_table(&self) -> Result<Arc<MlaTable>, DataLoadError>;
}
