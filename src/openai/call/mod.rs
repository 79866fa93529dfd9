//! One model turn: request construction, dispatch, and the turn's outcome.

mod proposer;
mod request;
mod types;

pub use proposer::propose_turn;
pub use request::build_chat_request;
pub use types::{ModelTurn, ToolCallRequest};
