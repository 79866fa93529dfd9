//! Integration with the OpenAI-compatible completion service.

pub mod call;
pub mod history;
pub mod simple;
pub mod tools;

pub use call::{ModelTurn, ToolCallRequest, propose_turn};
pub use history::ConversationHistory;
pub use simple::{extract_name, extract_name_blocking};
pub use tools::{
    ORDER_PIZZA_TOOL_NAME, OrderArgs, ToolDefinition, ToolParametersBuilder,
    build_order_pizza_tool, parse_order_args,
};
