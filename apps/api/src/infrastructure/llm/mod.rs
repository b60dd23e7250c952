pub mod openrouter_client;
pub mod prompts;
pub mod traits;

pub use openrouter_client::OpenRouterClient;
pub use traits::{ActionPlan, GenerationError, IssueReport, LlmService, SummaryRequest};
