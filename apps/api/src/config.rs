//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup via `std::env::var`, after `dotenvy`
//! has loaded any `.env` file.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,civic_api=debug")
//! - `DATA_DIR`: Directory holding the datasets (default: "./data"). A relative
//!   path is resolved against the process working directory, so the default
//!   only finds the shipped samples when run from `apps/api`. From the
//!   workspace root, set `DATA_DIR=apps/api/data`.
//! - `PINCODE_DATASET`: Pincode dataset file name (default: "mh_pincode_sample.json")
//! - `MLA_DATASET`: MLA dataset file name (default: "mh_mla_sample.json")
//! - `OPENROUTER_API_KEY`: API key; without it every generation uses its fallback
//! - `OPENROUTER_BASE_URL`: API base (default: "https://openrouter.ai/api/v1")
//! - `OPENROUTER_MODEL`: Model id (default: "meta-llama/llama-3.2-1b-instruct")
//! - `LLM_TIMEOUT_SECONDS`: HTTP timeout for generation calls (default: 30)
//! - `SUMMARY_CACHE_CAPACITY`: Max cached representative summaries (default: 100)

use crate::application::summarize_representative::use_case::DEFAULT_SUMMARY_CACHE_CAPACITY;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Dataset directory used when `DATA_DIR` is unset, relative to the working
/// directory.
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the dataset file names are resolved against
    pub data_dir: PathBuf,

    pub pincode_dataset: String,

    pub mla_dataset: String,

    /// OpenRouter API key; `None` disables generation
    pub openrouter_api_key: Option<String>,

    pub openrouter_base_url: String,

    pub openrouter_model: String,

    /// Timeout applied to each generation request
    pub llm_timeout_seconds: u64,

    /// Bound on the LRU summary cache
    pub summary_cache_capacity: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: env_or("DATA_DIR", PathBuf::from(DEFAULT_DATA_DIR))?,
            pincode_dataset: env_or("PINCODE_DATASET", "mh_pincode_sample.json".to_string())?,
            mla_dataset: env_or("MLA_DATASET", "mh_mla_sample.json".to_string())?,
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY").ok(),
            openrouter_base_url: env_or(
                "OPENROUTER_BASE_URL",
                "https://openrouter.ai/api/v1".to_string(),
            )?,
            openrouter_model: env_or(
                "OPENROUTER_MODEL",
                "meta-llama/llama-3.2-1b-instruct".to_string(),
            )?,
            llm_timeout_seconds: env_or("LLM_TIMEOUT_SECONDS", 30)?,
            summary_cache_capacity: env_or(
                "SUMMARY_CACHE_CAPACITY",
                DEFAULT_SUMMARY_CACHE_CAPACITY,
            )?,
        })
    }

    pub fn pincode_dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.pincode_dataset)
    }

    pub fn mla_dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.mla_dataset)
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_seconds)
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
