use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestToolMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Append-only conversation history, seeded with one system instruction.
/// This wraps a `Vec<ChatCompletionRequestMessage>` and provides ergonomic
/// builder-style helpers.
///
/// Invariant: the system message is always the first element and is never
/// replaced. The order of messages is preserved (push order == send order).
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    messages: Vec<ChatCompletionRequestMessage>,
}

impl ConversationHistory {
    /// Create a history whose first message is the given system instruction.
    pub fn with_system<S: AsRef<str>>(content: S) -> Self {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(content.as_ref())
            .build()
            .expect("valid system message");
        Self { messages: vec![system.into()] }
    }

    /// Current length, including the system message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get slice view for building a completion request.
    pub fn as_slice(&self) -> &[ChatCompletionRequestMessage] {
        &self.messages
    }

    /// Add user message.
    pub fn add_user<S: AsRef<str>>(&mut self, content: S) -> &mut Self {
        let msg = ChatCompletionRequestUserMessageArgs::default()
            .content(content.as_ref())
            .build()
            .expect("valid user message");
        self.messages.push(msg.into());
        self
    }

    /// Add assistant message (text only).
    pub fn add_assistant<S: AsRef<str>>(&mut self, content: S) -> &mut Self {
        let msg = ChatCompletionRequestAssistantMessageArgs::default()
            .content(content.as_ref())
            .build()
            .expect("valid assistant message");
        self.messages.push(msg.into());
        self
    }

    /// Add a tool-result message keyed to the invocation that produced it.
    /// The payload is JSON already serialized upstream.
    pub fn add_tool_result<S: AsRef<str>>(&mut self, tool_call_id: &str, payload: S) -> &mut Self {
        let msg = ChatCompletionRequestToolMessageArgs::default()
            .tool_call_id(tool_call_id)
            .content(payload.as_ref())
            .build()
            .expect("valid tool message");
        self.messages.push(msg.into());
        self
    }
}
