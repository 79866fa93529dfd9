//! The one tool this agent declares: `order_pizza`.
//!
//! Arguments arrive as a JSON string from the model and are validated into a
//! typed struct before the pricing function ever runs.

use serde::Deserialize;

use super::{ToolDefinition, ToolParametersBuilder};
use crate::error::AgentError;

pub const ORDER_PIZZA_TOOL_NAME: &str = "order_pizza";

/// Typed arguments matching the declared schema, field for field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderArgs {
    pub size: String,
    pub crust: String,
    pub toppings: Vec<String>,
    pub sauces: Vec<String>,
}

/// Declare the `order_pizza` tool for the completion request.
pub fn build_order_pizza_tool() -> ToolDefinition {
    let parameters = ToolParametersBuilder::new_object()
        .add_string("size", Some("Pizza size, e.g. small, medium, large, extra large"))
        .add_string("crust", Some("Crust style for the pizza"))
        .add_string_array("toppings", Some("Topping names; may be empty"))
        .add_string_array("sauces", Some("Sauce names; may be empty"))
        .required("size")
        .required("crust")
        .required("toppings")
        .required("sauces")
        .additional_properties(false)
        .build();

    ToolDefinition::new(
        ORDER_PIZZA_TOOL_NAME,
        "Place a pizza order with size, crust, toppings, and sauces",
        parameters,
    )
}

/// Validate raw tool-call arguments against the schema's shape.
/// Invalid JSON, a missing field, or a wrong type all fail the same way.
pub fn parse_order_args(raw: &str) -> Result<OrderArgs, AgentError> {
    serde_json::from_str(raw).map_err(|e| AgentError::ArgumentValidation {
        tool: ORDER_PIZZA_TOOL_NAME.to_string(),
        message: e.to_string(),
    })
}
