//! Tolerant line-item extractor for receipt OCR text.
//!
//! OCR output from photographed receipts is noisy: misaligned columns,
//! dropped currency symbols, stray header and footer text. The extractor
//! matches one permissive pattern per physical line and silently drops
//! everything else. The failure mode is a missed item, never an invented
//! one.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use super::patterns::LINE_ITEM;
use crate::models::receipt::LineItem;

/// Line-item extractor over raw receipt text.
#[derive(Debug, Default)]
pub struct LineItemExtractor;

impl LineItemExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw OCR text into line items, in order of appearance.
    ///
    /// Never fails: lines that do not look like an item row (headers, tax
    /// lines, garbage) produce nothing. At most one item per line; repeated
    /// dish names are kept as separate rows.
    pub fn extract(&self, raw_text: &str) -> Vec<LineItem> {
        let mut items = Vec::new();

        for line in raw_text.lines() {
            match self.extract_line(line) {
                Some(item) => {
                    debug!(line, ?item, "matched receipt row");
                    items.push(item);
                }
                None => debug!(line, "no item match"),
            }
        }

        items
    }

    fn extract_line(&self, line: &str) -> Option<LineItem> {
        let caps = LINE_ITEM.captures(line)?;

        let quantity: u32 = caps[1].parse().ok()?;
        if quantity == 0 {
            return None;
        }

        let description = caps[2].trim();
        if description.is_empty() {
            return None;
        }

        let unit_price = Decimal::from_str(&caps[3].replace(',', "")).ok()?;

        Some(LineItem::new(quantity, description, unit_price))
    }
}

/// Extract line items from raw receipt OCR text.
pub fn extract_items(raw_text: &str) -> Vec<LineItem> {
    LineItemExtractor::new().extract(raw_text)
}
