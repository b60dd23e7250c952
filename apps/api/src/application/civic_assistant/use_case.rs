use crate::infrastructure::llm::traits::{ActionPlan, GenerationError, IssueReport, LlmService};
use std::sync::Arc;
use tracing::{instrument, warn};

pub const CHAT_OFFLINE_REPLY: &str = "I am currently offline. Please try again later.";
pub const CHAT_ERROR_REPLY: &str = "I encountered an error processing your request.";

/// Action-plan drafting and civic chat. Neither call ever fails: generator
/// errors are replaced with fixed fallback text.
pub struct CivicAssistantUseCase {
    llm: Arc<dyn LlmService>,
}

impl CivicAssistantUseCase {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    #[instrument(skip(self, issue), fields(category = %issue.category))]
    pub async fn draft_action_plan(&self, issue: &IssueReport) -> ActionPlan {
        match self.llm.draft_action_plan(issue).await {
            Ok(plan) => plan,
            Err(e) => {
                warn!(error = %e, "Action plan generation failed, serving template");
                fallback_action_plan(issue)
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn chat(&self, query: &str) -> String {
        match self.llm.chat(query).await {
            Ok(reply) => reply,
            Err(GenerationError::NotConfigured) => CHAT_OFFLINE_REPLY.to_string(),
            Err(e) => {
                warn!(error = %e, "Civic chat failed");
                CHAT_ERROR_REPLY.to_string()
            }
        }
    }
}

pub fn fallback_action_plan(issue: &IssueReport) -> ActionPlan {
    let IssueReport {
        description,
        category,
    } = issue;
    ActionPlan {
        whatsapp: format!("Hello, I would like to report a {category} issue: {description}"),
        email_subject: format!("Complaint regarding {category}"),
        email_body: format!(
            "Respected Authority,\n\nI am writing to bring to your attention a {category} issue: {description}.\n\n\
             Please take necessary action.\n\nSincerely,\nCitizen"
        ),
    }
}
