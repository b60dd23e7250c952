use super::{
    prompts,
    traits::{ActionPlan, GenerationError, IssueReport, LlmService, SummaryRequest},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Chat-completions client for OpenRouter.
///
/// Without an API key every call fails fast with
/// [`GenerationError::NotConfigured`] and no request is sent.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenRouterClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str, json_mode: bool) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::NotConfigured)?;

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        debug!(model = %self.model, json_mode, "Sending chat completion request");
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        extract_content(response)
    }
}

fn extract_content(response: ChatCompletionResponse) -> Result<String, GenerationError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GenerationError::MalformedResponse("no choices in response".into()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::MalformedResponse("empty completion".into()));
    }
    Ok(trimmed.to_string())
}

/// Parses the JSON object the action-plan prompt asks for. Models sometimes
/// wrap it in a markdown fence despite the instructions.
fn parse_action_plan(text: &str) -> Result<ActionPlan, GenerationError> {
    let body = text.trim();
    let body = body
        .strip_prefix("```json")
        .or_else(|| body.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(body)
        .trim();

    serde_json::from_str(body).map_err(|e| {
        GenerationError::MalformedResponse(format!("action plan is not valid JSON: {}", e))
    })
}

#[async_trait]
impl LlmService for OpenRouterClient {
    #[instrument(skip(self, request), fields(constituency = %request.assembly_constituency))]
    async fn summarize_representative(
        &self,
        request: &SummaryRequest,
    ) -> Result<String, GenerationError> {
        self.complete(&prompts::representative_summary_prompt(request), false)
            .await
    }

    #[instrument(skip(self, issue), fields(category = %issue.category))]
    async fn draft_action_plan(&self, issue: &IssueReport) -> Result<ActionPlan, GenerationError> {
        let text = self
            .complete(&prompts::action_plan_prompt(issue), true)
            .await?;
        parse_action_plan(&text)
    }

    #[instrument(skip_all)]
    async fn chat(&self, query: &str) -> Result<String, GenerationError> {
        self.complete(&prompts::civic_chat_prompt(query), false).await
    }
}
