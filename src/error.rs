//! Error taxonomy for remote calls and tool dispatch.
//!
//! Every variant is fatal: the session propagates it with `?` up to `main`,
//! which reports once and exits. There is no retry path.

use async_openai::error::{ApiError, OpenAIError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// Transport-level failure talking to the completion service
    /// (connection, TLS, rate limiting, non-auth API rejections).
    #[error("network failure calling completion API: {0}")]
    Network(String),

    /// The completion service rejected the credential.
    #[error("completion API rejected credentials: {0}")]
    Auth(String),

    /// The completion response could not be understood
    /// (deserialization failure, empty choices, missing content).
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// Tool-call arguments did not match the declared schema.
    #[error("arguments for tool '{tool}' failed validation: {message}")]
    ArgumentValidation { tool: String, message: String },

    /// The model requested a tool that was never declared.
    #[error("model requested unknown tool '{requested}'")]
    UnknownTool { requested: String },
}

impl From<OpenAIError> for AgentError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => AgentError::Network(e.to_string()),
            OpenAIError::ApiError(api) if is_auth_error(&api) => AgentError::Auth(api.message),
            OpenAIError::ApiError(api) => AgentError::Network(api.message),
            OpenAIError::JSONDeserialize(e) => AgentError::MalformedResponse(e.to_string()),
            OpenAIError::InvalidArgument(msg) => AgentError::MalformedResponse(msg),
            other => AgentError::Network(other.to_string()),
        }
    }
}

fn is_auth_error(api: &ApiError) -> bool {
    let auth_shaped = |s: &str| {
        let s = s.to_ascii_lowercase();
        s.contains("auth") || s.contains("api key") || s.contains("api_key")
    };
    api.r#type.as_deref().is_some_and(auth_shaped) || auth_shaped(&api.message)
}
