//! One-shot completions (no tools, no conversation loop).

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use tokio::runtime::Runtime;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::AgentError;
use crate::openai::ConversationHistory;
use crate::openai::call::build_chat_request;

const NAME_EXTRACTION_PROMPT: &str =
    "Extract only the person's name from the message. Reply with only the name.";

/// Issue a single system + user completion and return the trimmed text of
/// the first choice.
#[instrument(name = "single_completion", skip(client, config, system, user), fields(user_len = user.len()))]
pub async fn single_completion(
    client: &Client<OpenAIConfig>,
    system: &str,
    user: &str,
    config: &Config,
) -> Result<String, AgentError> {
    let mut history = ConversationHistory::with_system(system);
    history.add_user(user);

    let req = build_chat_request(&history, &[], config)?;
    info!(target: "openai", model = %config.model, "single_completion_request");
    let resp = client.chat().create(req).await.map_err(AgentError::from)?;
    debug!(target: "openai", choices = resp.choices.len(), "single_completion_response");

    let text = resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| {
            AgentError::MalformedResponse("completion contained no assistant content".to_string())
        })?;
    Ok(text.trim().to_string())
}

/// Ask the model to pull the person's name out of free-text input.
/// The result is not validated; remote failure propagates to the caller.
pub async fn extract_name(
    client: &Client<OpenAIConfig>,
    raw_input: &str,
    config: &Config,
) -> Result<String, AgentError> {
    single_completion(client, NAME_EXTRACTION_PROMPT, raw_input, config).await
}

/// Blocking helper that creates a runtime internally (for tests and callers
/// outside an async context).
pub fn extract_name_blocking(
    client: &Client<OpenAIConfig>,
    raw_input: &str,
    config: &Config,
) -> Result<String, AgentError> {
    let rt = Runtime::new()
        .map_err(|e| AgentError::Network(format!("building tokio runtime: {e}")))?;
    rt.block_on(extract_name(client, raw_input, config))
}
