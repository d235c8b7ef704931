//! Receipt line-item model and display formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rendered in place of an absent total.
pub const TOTAL_PLACEHOLDER: &str = "--";

/// A single parsed row of a receipt.
///
/// Constructed by the extractor from a line that matched the item pattern;
/// committed edits keep the same invariants: positive quantity, trimmed
/// non-empty description, non-negative price with at most two fractional
/// digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Number of units ordered.
    pub quantity: u32,

    /// Dish or product name as printed on the receipt.
    pub description: String,

    /// Price per unit in currency minor-unit precision.
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(quantity: u32, description: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            quantity,
            description: description.into(),
            unit_price,
        }
    }

    /// Extended price for this row. Display aid only; the ledger total is
    /// independent and never derived from this.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Format a money amount with a currency symbol and exactly two fractional
/// digits (e.g., `$9.50`).
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Format an optional total, falling back to a placeholder when unset.
pub fn format_total(total: Option<Decimal>) -> String {
    match total {
        Some(amount) => format_amount(amount),
        None => TOTAL_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_line_total() {
        let item = LineItem::new(3, "Lemonade", Decimal::from_str("2.50").unwrap());
        assert_eq!(item.line_total(), Decimal::from_str("7.50").unwrap());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::from_str("9.5").unwrap()), "$9.50");
        assert_eq!(format_amount(Decimal::from_str("1250").unwrap()), "$1250.00");
        assert_eq!(format_amount(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_total_placeholder() {
        assert_eq!(format_total(None), "--");
        assert_eq!(
            format_total(Some(Decimal::from_str("42.00").unwrap())),
            "$42.00"
        );
    }
}
