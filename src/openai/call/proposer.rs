use async_openai::Client;
use async_openai::config::OpenAIConfig;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::AgentError;
use crate::openai::ConversationHistory;
use crate::openai::tools::ToolDefinition;

use super::request::build_chat_request;
use super::types::{ModelTurn, ToolCallRequest};

/// Send the full history (plus declared tools) and report what the model
/// produced this turn. Any remote failure is classified and returned; the
/// caller treats it as fatal.
#[instrument(name = "propose_turn", skip(client, history, tools, config), fields(history_len = history.len()))]
pub async fn propose_turn(
    client: &Client<OpenAIConfig>,
    history: &ConversationHistory,
    tools: &[ToolDefinition],
    config: &Config,
) -> Result<ModelTurn, AgentError> {
    let req = build_chat_request(history, tools, config)?;

    info!(target: "openai", model = %config.model, max_tokens = config.max_tokens, "chat_completion_request");
    let resp = client.chat().create(req).await.map_err(AgentError::from)?;
    debug!(target: "openai", choices = resp.choices.len(), "chat_completion_response");

    let choice = resp.choices.into_iter().next().ok_or_else(|| {
        AgentError::MalformedResponse("completion response contained no choices".to_string())
    })?;

    let text = choice.message.content.filter(|t| !t.is_empty());
    let tool_calls: Vec<ToolCallRequest> = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|tc| ToolCallRequest {
            id: tc.id,
            name: tc.function.name,
            arguments: tc.function.arguments,
        })
        .collect();

    let turn = ModelTurn { text, tool_calls };
    debug!(target: "openai", turn = %turn, "model_turn");
    Ok(turn)
}
