//! Vocabulary dataset loader.
//!
//! The dataset is a CSV with at least `category` and `name` columns. Rows are
//! filtered by category into the five vocabulary lists. The lists only feed
//! the system prompt as menu context; user input is never validated against
//! them.

use color_eyre::{Result, eyre::eyre};
use std::fs;
use tracing::info;

/// Categories recognized in the dataset; anything else is ignored.
const CATEGORY_NAMED_PIZZA: &str = "named_pizza";
const CATEGORY_SIZE: &str = "size";
const CATEGORY_CRUST: &str = "crust";
const CATEGORY_TOPPING: &str = "topping";
const CATEGORY_SAUCE: &str = "sauce";

/// Vocabulary lists loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Named pizzas, lower-cased.
    pub named_pizzas: Vec<String>,
    pub sizes: Vec<String>,
    pub crusts: Vec<String>,
    pub toppings: Vec<String>,
    pub sauces: Vec<String>,
}

impl Vocabulary {
    /// Load and parse the dataset file. Missing file or header is fatal.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| eyre!("reading pizza dataset from '{path}': {e}"))?;
        let vocabulary = Self::parse(&content)?;
        info!(
            target: "dataset",
            sizes = vocabulary.sizes.len(),
            crusts = vocabulary.crusts.len(),
            toppings = vocabulary.toppings.len(),
            sauces = vocabulary.sauces.len(),
            named_pizzas = vocabulary.named_pizzas.len(),
            "vocabulary_loaded"
        );
        Ok(vocabulary)
    }

    /// Parse CSV content with a `category`/`name` header.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());
        let header_line = lines.next().ok_or_else(|| eyre!("pizza dataset is empty"))?;

        let headers = split_csv_line(header_line);
        let category_idx = column_index(&headers, "category")?;
        let name_idx = column_index(&headers, "name")?;

        let mut vocabulary = Vocabulary::default();
        for line in lines {
            let fields = split_csv_line(line);
            let (Some(category), Some(name)) = (fields.get(category_idx), fields.get(name_idx))
            else {
                continue;
            };
            let name = name.trim();
            match category.trim() {
                CATEGORY_NAMED_PIZZA => vocabulary.named_pizzas.push(name.to_lowercase()),
                CATEGORY_SIZE => vocabulary.sizes.push(name.to_string()),
                CATEGORY_CRUST => vocabulary.crusts.push(name.to_string()),
                CATEGORY_TOPPING => vocabulary.toppings.push(name.to_string()),
                CATEGORY_SAUCE => vocabulary.sauces.push(name.to_string()),
                _ => {}
            }
        }
        Ok(vocabulary)
    }

    /// Render the vocabulary as a menu block for the system prompt.
    pub fn menu_context(&self) -> String {
        format!(
            "Menu context:\nSizes: {}\nCrusts: {}\nToppings: {}\nSauces: {}\nNamed pizzas: {}",
            self.sizes.join(", "),
            self.crusts.join(", "),
            self.toppings.join(", "),
            self.sauces.join(", "),
            self.named_pizzas.join(", "),
        )
    }
}

fn column_index(headers: &[String], wanted: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| eyre!("pizza dataset is missing required column '{wanted}'"))
}

/// Split one CSV line into fields, honoring double-quoted fields
/// (a quoted field may contain commas; "" is an escaped quote).
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
category,name
size,small
size,extra large
crust,thin
topping,pepperoni
topping,olives
sauce,bbq
named_pizza,Margherita
named_pizza,\"Meat Feast, Deluxe\"
beverage,cola
";

    #[test]
    fn parses_categories_into_lists() {
        let v = Vocabulary::parse(SAMPLE).unwrap();
        assert_eq!(v.sizes, vec!["small", "extra large"]);
        assert_eq!(v.crusts, vec!["thin"]);
        assert_eq!(v.toppings, vec!["pepperoni", "olives"]);
        assert_eq!(v.sauces, vec!["bbq"]);
    }

    #[test]
    fn named_pizzas_are_lowercased() {
        let v = Vocabulary::parse(SAMPLE).unwrap();
        assert_eq!(v.named_pizzas, vec!["margherita", "meat feast, deluxe"]);
    }

    #[test]
    fn unknown_categories_are_ignored() {
        let v = Vocabulary::parse(SAMPLE).unwrap();
        let all = v.sizes.len() + v.crusts.len() + v.toppings.len() + v.sauces.len()
            + v.named_pizzas.len();
        assert_eq!(all, 8); // cola is dropped
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = Vocabulary::parse("category\nsize\n").unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(Vocabulary::parse("").is_err());
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let fields = split_csv_line("named_pizza,\"Meat, Deluxe\"");
        assert_eq!(fields, vec!["named_pizza", "Meat, Deluxe"]);
    }

    #[test]
    fn menu_context_lists_everything() {
        let v = Vocabulary::parse(SAMPLE).unwrap();
        let menu = v.menu_context();
        assert!(menu.contains("Sizes: small, extra large"));
        assert!(menu.contains("Sauces: bbq"));
        assert!(menu.contains("Named pizzas: margherita"));
    }
}
