use async_openai::types::{
    ChatCompletionTool, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
};
use tracing::debug;

use crate::config::Config;
use crate::error::AgentError;
use crate::openai::ConversationHistory;
use crate::openai::tools::ToolDefinition;

/// Build a chat-completion request from the full history and the declared
/// tools. Tool selection is left to the model (`tool_choice: auto`); requests
/// without tools (name extraction) omit the tools field entirely.
pub fn build_chat_request(
    history: &ConversationHistory,
    tools: &[ToolDefinition],
    config: &Config,
) -> Result<CreateChatCompletionRequest, AgentError> {
    let mut builder = CreateChatCompletionRequestArgs::default();
    builder
        .model(&config.model)
        .messages(history.as_slice())
        .max_tokens(config.max_tokens);

    if !tools.is_empty() {
        let tools_for_api: Vec<ChatCompletionTool> =
            tools.iter().map(|t| t.as_chat_tool()).collect();
        builder.tools(tools_for_api).tool_choice("auto");
    }

    let req = builder.build().map_err(AgentError::from)?;
    debug!(target: "openai", model = %config.model, messages = history.len(), tools = tools.len(), "chat_request_built");
    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::tools::build_order_pizza_tool;

    fn test_config() -> Config {
        Config {
            api_key: "test-key".to_string(),
            api_base: crate::config::API_BASE.to_string(),
            model: crate::config::MODEL_NAME.to_string(),
            max_tokens: 1024,
            dataset_path: "pizza_dataset.csv".to_string(),
        }
    }

    #[test]
    fn request_carries_history_and_tool() {
        let mut history = ConversationHistory::with_system("sys");
        history.add_user("a large pizza please");
        let tools = vec![build_order_pizza_tool()];

        let req = build_chat_request(&history, &tools, &test_config()).unwrap();
        assert_eq!(req.model, crate::config::MODEL_NAME);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.tools.as_ref().map(Vec::len), Some(1));
        assert!(req.tool_choice.is_some());
    }

    #[test]
    fn request_without_tools_omits_tool_fields() {
        let history = ConversationHistory::with_system("sys");
        let req = build_chat_request(&history, &[], &test_config()).unwrap();
        assert!(req.tools.is_none());
        assert!(req.tool_choice.is_none());
    }
}
