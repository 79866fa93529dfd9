//! Deterministic pricing of a pizza order.
//!
//! Pure: no printing and no total tracking here; both belong to the session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::openai::OrderArgs;

/// Fixed estimated time to completion, returned with every receipt.
pub const ETA: &str = "20 minutes";

/// One priced pizza. Immutable once appended to the session order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub size: String,
    pub crust: String,
    pub toppings: Vec<String>,
    pub sauces: Vec<String>,
    /// Rounded to 2 decimal places.
    pub price: Decimal,
}

/// Full tool-result payload fed back to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub status: String,
    pub order: Order,
    pub eta: String,
}

/// Base price by lower-cased size; unrecognized sizes get the medium tier.
fn base_price(size: &str) -> Decimal {
    match size.to_lowercase().as_str() {
        "small" => Decimal::from(5),
        "medium" => Decimal::from(7),
        "large" => Decimal::from(9),
        "extra large" => Decimal::from(11),
        _ => Decimal::from(7),
    }
}

/// Price an order: base + 0.75 per topping + 0.50 per sauce, rounded to
/// 2 decimal places. Accepts any input; empty lists simply contribute zero.
pub fn price_order(args: &OrderArgs) -> OrderReceipt {
    let per_topping = Decimal::new(75, 2);
    let per_sauce = Decimal::new(50, 2);

    let mut price = base_price(&args.size)
        + per_topping * Decimal::from(args.toppings.len() as i64)
        + per_sauce * Decimal::from(args.sauces.len() as i64);
    price = price.round_dp(2);
    price.rescale(2);

    OrderReceipt {
        status: "success".to_string(),
        order: Order {
            size: args.size.clone(),
            crust: args.crust.clone(),
            toppings: args.toppings.clone(),
            sauces: args.sauces.clone(),
            price,
        },
        eta: ETA.to_string(),
    }
}
