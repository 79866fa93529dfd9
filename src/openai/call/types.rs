use std::fmt::{self, Display};

/// One tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallRequest {
    /// Invocation identifier; the tool-result message is keyed to it.
    pub id: String,
    pub name: String,
    /// Raw JSON-encoded arguments, validated later by the tool's own parser.
    pub arguments: String,
}

/// What one model turn produced. A turn may carry assistant text, tool
/// invocations, both, or neither (the model is still gathering parameters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelTurn {
    pub text: Option<String>,
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ModelTurn {
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

impl Display for ModelTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text_len = self.text.as_deref().map(str::len).unwrap_or(0);
        let names: Vec<&str> = self.tool_calls.iter().map(|c| c.name.as_str()).collect();
        write!(f, "ModelTurn text_len={} tool_calls={:?}", text_len, names)
    }
}
