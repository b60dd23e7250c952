use crate::domain::location::{
    entity::{MlaRecord, MlaTable, PincodeEntry, PincodeTable},
    errors::DataLoadError,
    repository::LocationDataSource,
    value_objects::PinCode,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Reads the pincode and MLA datasets from JSON files.
///
/// Each file holds a JSON array of records. Tables are loaded lazily on first
/// use; concurrent first callers all wait on the same load, and every later
/// call gets the same `Arc`. A failed load leaves the cell empty and the error
/// goes back to the caller.
pub struct JsonDatasetLoader {
    pincode_path: PathBuf,
    mla_path: PathBuf,
    pincodes: OnceCell<Arc<PincodeTable>>,
    mlas: OnceCell<Arc<MlaTable>>,
}

impl JsonDatasetLoader {
    pub fn new(pincode_path: impl Into<PathBuf>, mla_path: impl Into<PathBuf>) -> Self {
        Self {
            pincode_path: pincode_path.into(),
            mla_path: mla_path.into(),
            pincodes: OnceCell::new(),
            mlas: OnceCell::new(),
        }
    }

    async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataLoadError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    async fn read_pincode_table(path: &Path) -> Result<PincodeTable, DataLoadError> {
        let records: Vec<PincodeEntry> = Self::read_records(path).await?;
        let mut table = HashMap::with_capacity(records.len());
        for entry in records {
            if PinCode::parse(&entry.pincode).is_none() {
                return Err(DataLoadError::InvalidPincode {
                    path: path.to_path_buf(),
                    pincode: entry.pincode,
                });
            }
            if table.contains_key(&entry.pincode) {
                return Err(DataLoadError::DuplicateKey {
                    path: path.to_path_buf(),
                    key: entry.pincode,
                });
            }
            table.insert(entry.pincode.clone(), entry);
        }
        Ok(table)
    }

    async fn read_mla_table(path: &Path) -> Result<MlaTable, DataLoadError> {
        let records: Vec<MlaRecord> = Self::read_records(path).await?;
        let mut table = HashMap::with_capacity(records.len());
        for record in records {
            if table.contains_key(&record.assembly_constituency) {
                return Err(DataLoadError::DuplicateKey {
                    path: path.to_path_buf(),
                    key: record.assembly_constituency,
                });
            }
            table.insert(record.assembly_constituency.clone(), record);
        }
        Ok(table)
    }
}

#[async_trait]
impl LocationDataSource for JsonDatasetLoader {
    async fn load_pincode_table(&self) -> Result<Arc<PincodeTable>, DataLoadError> {
        self.pincodes
            .get_or_try_init(|| async {
                let table = Self::read_pincode_table(&self.pincode_path)
                    .await
                    .inspect_err(|e| {
                        error!(dataset = "pincode", error = %e, "Dataset load failed")
                    })?;
                info!(
                    dataset = "pincode",
                    path = %self.pincode_path.display(),
                    records = table.len(),
                    "Dataset loaded"
                );
                Ok::<_, DataLoadError>(Arc::new(table))
            })
            .await
            .cloned()
    }

    async fn load_mla_table(&self) -> Result<Arc<MlaTable>, DataLoadError> {
        self.mlas
            .get_or_try_init(|| async {
                let table = Self::read_mla_table(&self.mla_path)
                    .await
                    .inspect_err(|e| {
                        error!(dataset = "mla", error = %e, "Dataset load failed")
                    })?;
                info!(
                    dataset = "mla",
                    path = %self.mla_path.display(),
                    records = table.len(),
                    "Dataset loaded"
                );
                Ok::<_, DataLoadError>(Arc::new(table))
            })
            .await
            .cloned()
    }
}
