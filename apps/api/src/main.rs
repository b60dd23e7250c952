use civic_api::{
    application::{
        civic_assistant::CivicAssistantUseCase,
        lookup_representative::{LookupRepresentativeUseCase, dto::LookupRequest},
        resolve_location::LocationResolver,
        summarize_representative::RepresentativeSummaryCache,
    },
    config::Config,
    infrastructure::{
        datasets::JsonDatasetLoader,
        llm::{IssueReport, LlmService, OpenRouterClient},
    },
};
use serde_json::json;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

const USAGE: &str = "usage:
  civic-api lookup <pincode> [issue_category]
  civic-api plan <category> <description...>
  civic-api chat <query...>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Lookup {
        pincode: String,
        issue_category: Option<String>,
    },
    Plan {
        category: String,
        description: String,
    },
    Chat {
        query: String,
    },
}

fn parse_command(args: &[String]) -> Option<Command> {
    let (name, rest) = args.split_first()?;
    match (name.as_str(), rest) {
        ("lookup", [pincode]) => Some(Command::Lookup {
            pincode: pincode.clone(),
            issue_category: None,
        }),
        ("lookup", [pincode, category]) => Some(Command::Lookup {
            pincode: pincode.clone(),
            issue_category: Some(category.clone()),
        }),
        ("plan", [category, description @ ..]) if !description.is_empty() => Some(Command::Plan {
            category: category.clone(),
            description: description.join(" "),
        }),
        ("chat", query) if !query.is_empty() => Some(Command::Chat {
            query: query.join(" "),
        }),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults. Logs go to stderr so
    // stdout stays pure JSON.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,civic_api=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse_command(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let config = Config::from_env()?;
    tracing::info!(
        pincodes = %config.pincode_dataset_path().display(),
        mlas = %config.mla_dataset_path().display(),
        "Using datasets"
    );
    let loader = Arc::new(JsonDatasetLoader::new(
        config.pincode_dataset_path(),
        config.mla_dataset_path(),
    ));
    let openrouter = OpenRouterClient::new(
        config.openrouter_api_key.clone(),
        config.openrouter_base_url.clone(),
        config.openrouter_model.clone(),
        config.llm_timeout(),
    )?;
    if !openrouter.is_configured() {
        tracing::warn!("OPENROUTER_API_KEY not set, generated text will use fallback templates");
    }
    let llm: Arc<dyn LlmService> = Arc::new(openrouter);

    let span = tracing::info_span!("command", id = %Uuid::now_v7());
    let output = async {
        match command {
            Command::Lookup {
                pincode,
                issue_category,
            } => {
                let resolver = Arc::new(LocationResolver::new(loader));
                let summaries = Arc::new(RepresentativeSummaryCache::with_capacity(
                    llm,
                    config.summary_cache_capacity,
                ));
                let lookup = LookupRepresentativeUseCase::new(resolver, summaries.clone());
                let result = lookup
                    .execute(LookupRequest {
                        pincode: pincode.clone(),
                        issue_category,
                    })
                    .await?;
                tracing::debug!(stats = ?summaries.stats(), "Summary cache stats");
                Ok::<_, anyhow::Error>(match result {
                    Some(found) => serde_json::to_value(found)?,
                    None => json!({
                        "pincode": pincode,
                        "found": false,
                        "message": "Pincode is malformed or outside known coverage",
                    }),
                })
            }
            Command::Plan {
                category,
                description,
            } => {
                let assistant = CivicAssistantUseCase::new(llm);
                let plan = assistant
                    .draft_action_plan(&IssueReport {
                        description,
                        category,
                    })
                    .await;
                Ok(serde_json::to_value(plan)?)
            }
            Command::Chat { query } => {
                let assistant = CivicAssistantUseCase::new(llm);
                Ok(json!({ "response": assistant.chat(&query).await }))
            }
        }
    }
    .instrument(span)
    .await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
