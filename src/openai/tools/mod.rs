//! Tools namespace: declaration core plus the `order_pizza` tool.

mod core; // ToolDefinition, ToolParametersBuilder
mod order_pizza; // the agent's single tool

pub use self::core::{ToolDefinition, ToolParametersBuilder};
pub use order_pizza::{ORDER_PIZZA_TOOL_NAME, OrderArgs, build_order_pizza_tool, parse_order_args};
