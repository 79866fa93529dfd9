use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};
use serde_json::{Map, Value, json};

/// Metadata for one function exposed to the model via tool calling.
/// Declaration only; argument parsing and execution are typed and live with
/// the tool's own module.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value, // JSON Schema
    pub strict: bool,
}

impl ToolDefinition {
    pub fn new(name: &'static str, description: &'static str, parameters: Value) -> Self {
        Self { name, description, parameters, strict: false }
    }

    /// Set the strict flag (strict function-calling mode).
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Convert to the SDK's `FunctionObject`.
    pub fn function_object(&self) -> FunctionObject {
        FunctionObject {
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            parameters: Some(self.parameters.clone()),
            strict: Some(self.strict),
        }
    }

    /// `ChatCompletionTool` form (for the request's tools vector).
    pub fn as_chat_tool(&self) -> ChatCompletionTool {
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: self.function_object(),
        }
    }
}

/// Builder for an object-typed JSON Schema used as tool parameters.
#[derive(Debug, Default)]
pub struct ToolParametersBuilder {
    properties: Map<String, Value>,
    required: Vec<Value>,
    additional_properties: Option<bool>,
}

impl ToolParametersBuilder {
    pub fn new_object() -> Self {
        Self::default()
    }

    pub fn add_string(mut self, name: &str, description: Option<&str>) -> Self {
        let mut prop = json!({ "type": "string" });
        if let Some(desc) = description {
            prop["description"] = json!(desc);
        }
        self.properties.insert(name.to_string(), prop);
        self
    }

    pub fn add_string_array(mut self, name: &str, description: Option<&str>) -> Self {
        let mut prop = json!({ "type": "array", "items": { "type": "string" } });
        if let Some(desc) = description {
            prop["description"] = json!(desc);
        }
        self.properties.insert(name.to_string(), prop);
        self
    }

    pub fn required(mut self, name: &str) -> Self {
        self.required.push(json!(name));
        self
    }

    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    pub fn build(self) -> Value {
        let mut schema = json!({
            "type": "object",
            "properties": Value::Object(self.properties),
            "required": Value::Array(self.required),
        });
        if let Some(allowed) = self.additional_properties {
            schema["additionalProperties"] = json!(allowed);
        }
        schema
    }
}
