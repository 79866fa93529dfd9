//! Interactive ordering session: the conversation loop, tool execution,
//! running totals, and the final summary.

use std::io::{self, Write};

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use color_eyre::Result;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::Config;
use crate::dataset::Vocabulary;
use crate::error::AgentError;
use crate::openai::{
    ConversationHistory, ORDER_PIZZA_TOOL_NAME, ToolCallRequest, build_order_pizza_tool,
    extract_name, parse_order_args, propose_turn,
};
use crate::pricing::{Order, price_order};

const ASSISTANT_ROLE_PROMPT: &str = "You are a helpful pizza-ordering assistant. \
Ask the user questions and place their order by calling the 'order_pizza' function when ready.";

/// One run of the program, from name capture to final summary.
pub struct Session {
    config: Config,
    client: Client<OpenAIConfig>,
    history: ConversationHistory,
    orders: Vec<Order>,
    total: Decimal,
}

impl Session {
    pub fn new(config: Config, vocabulary: &Vocabulary) -> Self {
        let client = config.client();
        let history = ConversationHistory::with_system(system_prompt(vocabulary));
        Self { config, client, history, orders: Vec::new(), total: Decimal::ZERO }
    }

    /// Drive the session to completion. Every remote failure is fatal and
    /// propagates out of here.
    pub async fn run(mut self) -> Result<()> {
        println!("👋 Welcome to Groq Pizza Bot!");
        let raw_name_input = prompt_line("Tell me your name: ")?;
        let name = extract_name(&self.client, &raw_name_input, &self.config).await?;
        println!("Hi {name}! Let's start your order.");
        info!(target: "session", name = %name, "session_started");

        let tools = vec![build_order_pizza_tool()];

        // Outer loop: one iteration per pizza. History is retained across pizzas.
        loop {
            let user_msg = prompt_line(&format!("\n{name}: "))?;
            self.history.add_user(&user_msg);

            // Inner loop: model turns for the current pizza. The model keeps
            // gathering parameters until it places an order via tool call; a
            // turn without a tool call always re-prompts the user, even when
            // the model returned no text.
            loop {
                let turn = propose_turn(&self.client, &self.history, &tools, &self.config).await?;

                if let Some(text) = &turn.text {
                    println!("\n🤖 AI: {text}");
                    self.history.add_assistant(text);
                }

                if turn.has_tool_calls() {
                    self.place_orders(turn.tool_calls)?;
                    break; // done with current pizza
                }

                let user_msg = prompt_line(&format!("\n{name}: "))?;
                self.history.add_user(&user_msg);
            }

            let cont = prompt_line("\nWould you like to order another pizza? (yes/no): ")?;
            if !cont.trim().eq_ignore_ascii_case("yes") {
                break;
            }
        }

        print!("{}", render_summary(&self.orders, self.total));
        info!(target: "session", orders = self.orders.len(), total = %self.total, "session_complete");
        Ok(())
    }

    /// Execute every requested invocation: validate, price, confirm, record,
    /// and append the tool result to the history keyed by the invocation id.
    fn place_orders(&mut self, calls: Vec<ToolCallRequest>) -> Result<(), AgentError> {
        for call in calls {
            if call.name != ORDER_PIZZA_TOOL_NAME {
                return Err(AgentError::UnknownTool { requested: call.name });
            }
            let args = parse_order_args(&call.arguments)?;
            let receipt = price_order(&args);
            debug!(target: "session", call_id = %call.id, price = %receipt.order.price, "order_priced");

            println!("\n✅ Order placed! ETA: {}", receipt.eta);
            println!("💰 Price: ${}", receipt.order.price);

            self.total += receipt.order.price;
            let payload =
                serde_json::to_string(&receipt).expect("order receipt serializes to JSON");
            self.history.add_tool_result(&call.id, payload);
            self.orders.push(receipt.order);
        }
        Ok(())
    }

    #[cfg(test)]
    fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[cfg(test)]
    fn total(&self) -> Decimal {
        self.total
    }
}

fn system_prompt(vocabulary: &Vocabulary) -> String {
    format!("{ASSISTANT_ROLE_PROMPT}\n\n{}", vocabulary.menu_context())
}

/// Print a prompt (no newline) and read one trimmed line from stdin.
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Render the numbered end-of-session summary with the grand total.
/// Pure so the output contract stays testable without a terminal.
pub fn render_summary(orders: &[Order], total: Decimal) -> String {
    let mut out = String::from("\n🧾 Final Order Summary:\n");
    for (i, order) in orders.iter().enumerate() {
        out.push_str(&format!("Pizza {}: {} {} crust\n", i + 1, order.size, order.crust));
        out.push_str(&format!(" Toppings: {}\n", order.toppings.join(", ")));
        out.push_str(&format!(" Sauces: {}\n", order.sauces.join(", ")));
        out.push_str(&format!(" Price: ${}\n\n", order.price));
    }
    let mut total = total;
    total.rescale(2);
    out.push_str(&format!("💳 Total Bill: ${total}\n"));
    out.push_str("🍕 Your pizzas will be ready soon. Thank you!\n");
    out
}
