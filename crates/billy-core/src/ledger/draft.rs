//! Staged edit state and field validation.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::receipt::LineItem;

/// An editable field of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Quantity,
    Description,
    UnitPrice,
}

/// Shadow copy of one item's editable fields, held as raw user-entered
/// strings. Values here are allowed to be transiently invalid; nothing is
/// parsed until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub quantity: String,
    pub description: String,
    pub unit_price: String,
}

impl ItemDraft {
    /// Seed a draft from an item's committed values, each in the form the
    /// display layer would show it.
    pub(super) fn seed(item: &LineItem) -> Self {
        Self {
            quantity: item.quantity.to_string(),
            description: item.description.clone(),
            unit_price: format!("{:.2}", item.unit_price),
        }
    }

    /// The shadow string for one field.
    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Quantity => &self.quantity,
            ItemField::Description => &self.description,
            ItemField::UnitPrice => &self.unit_price,
        }
    }

    pub(super) fn set_field(&mut self, field: ItemField, value: &str) {
        let slot = match field {
            ItemField::Quantity => &mut self.quantity,
            ItemField::Description => &mut self.description,
            ItemField::UnitPrice => &mut self.unit_price,
        };
        *slot = value.to_string();
    }
}

/// Parse a staged quantity. Must be a positive base-10 integer.
pub(super) fn parse_quantity(raw: &str) -> Option<u32> {
    let quantity: u32 = raw.trim().parse().ok()?;
    (quantity > 0).then_some(quantity)
}

/// Parse a staged description. Must be non-empty after trimming.
pub(super) fn parse_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a money amount from user input. A leading currency symbol and
/// grouping commas are tolerated; the value must be non-negative with at
/// most two fractional digits.
///
/// This is the single money rule for every user-supplied amount: staged
/// prices, staged totals, and totals handed in from outside the core.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    let amount = Decimal::from_str(&trimmed.replace(',', "")).ok()?;
    (!amount.is_sign_negative() && amount.scale() <= 2).then_some(amount)
}
