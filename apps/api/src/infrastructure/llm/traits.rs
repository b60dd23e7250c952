use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Why a generation call produced nothing usable.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no LLM API key configured")]
    NotConfigured,
    #[error("LLM request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed LLM response: {0}")]
    MalformedResponse(String),
}

/// Inputs for describing a representative. Also the summary cache key, so
/// every field takes part in equality; `issue_category: None` is its own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub district: String,
    pub assembly_constituency: String,
    pub mla_name: String,
    pub issue_category: Option<String>,
}

/// A civic issue reported by a citizen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueReport {
    pub description: String,
    pub category: String,
}

/// Ready-to-send artifacts for reporting an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionPlan {
    pub whatsapp: String,
    pub email_subject: String,
    pub email_body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Short paragraph on what the MLA of a constituency is responsible for
    async fn summarize_representative(
        &self,
        request: &SummaryRequest,
    ) -> Result<String, GenerationError>;

    /// WhatsApp message and email draft for an issue
    async fn draft_action_plan(&self, issue: &IssueReport) -> Result<ActionPlan, GenerationError>;

    /// Free-form civic assistant reply
    async fn chat(&self, query: &str) -> Result<String, GenerationError>;
}
